//! Glob and variable expansion over the argument vector.
//!
//! Globs run first, variables second. Both rebuild the vector by
//! appending rather than shifting in place, so a pattern may expand to
//! any number of matches.

use std::env;

use glob::glob;
use thiserror::Error;

/// Marks a token as a variable reference.
const SIGIL: char = '$';

#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("undefined variable: {0}")]
    Unbound(String),
}

/// Expand every token containing a wildcard into its sorted match list.
/// A token with no matches is kept as the literal pattern.
pub fn expand_globs(argv: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(argv.len());
    for arg in argv {
        if !(arg.contains('*') || arg.contains('?') || arg.contains('[')) {
            out.push(arg);
            continue;
        }
        match glob(&arg) {
            Ok(paths) => {
                let matched: Vec<String> = paths
                    .filter_map(|p| p.ok())
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect();
                if matched.is_empty() {
                    out.push(arg);
                } else {
                    out.extend(matched);
                }
            }
            Err(_) => out.push(arg),
        }
    }
    out
}

/// Replace every `$name` token with the variable's value, whole-token.
/// An unbound name aborts the line; nothing is partially substituted.
pub fn resolve_vars(argv: Vec<String>) -> Result<Vec<String>, ExpandError> {
    argv.into_iter()
        .map(|arg| match arg.strip_prefix(SIGIL) {
            Some(name) => env::var(name).map_err(|_| ExpandError::Unbound(name.to_string())),
            None => Ok(arg),
        })
        .collect()
}
