//! Command descriptor construction.
//!
//! Walks the token list in order, applying inline assignments to the
//! process environment as they are scanned and opening redirection targets
//! immediately. Any open failure aborts the whole line before anything
//! runs. A trailing `HERE{` argument switches the command into
//! literal-block mode.

use std::env;
use std::fs::{File, OpenOptions};
use std::io;

use thiserror::Error;

use crate::heredoc;
use crate::lexer::Token;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{path}: {source}")]
    Redirect { path: String, source: io::Error },
    #[error("`HERE{{` cannot be combined with redirection or background execution")]
    HeredocConflict,
    #[error("invalid assignment: missing variable name")]
    EmptyAssignment,
}

/// Everything needed to run one command, derived from one input line.
/// Owned by the line-processing call and discarded afterwards.
#[derive(Debug, Default)]
pub struct CommandSpec {
    pub argv: Vec<String>,
    pub stdin: Option<File>,
    pub stdout: Option<File>,
    pub background: bool,
    pub heredoc: bool,
    pub heredoc_body: Option<String>,
}

impl CommandSpec {
    /// Build a descriptor from the token stream. Assignments and file
    /// opens take effect in token order, so an assignment earlier on the
    /// line sticks even when a later open fails.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<CommandSpec, ParseError> {
        let mut spec = CommandSpec::default();

        for token in tokens {
            match token {
                Token::Word(word) => spec.argv.push(word),
                Token::Assign { name, value } => {
                    if name.is_empty() {
                        return Err(ParseError::EmptyAssignment);
                    }
                    env::set_var(name, value);
                }
                Token::RedirectIn(path) => {
                    let file = File::open(&path)
                        .map_err(|source| ParseError::Redirect { path, source })?;
                    spec.stdin = Some(file);
                }
                Token::RedirectOut(path) => {
                    let file = open_truncate(&path)
                        .map_err(|source| ParseError::Redirect { path, source })?;
                    spec.stdout = Some(file);
                }
                Token::Background => spec.background = true,
            }
        }

        if spec.argv.last().map(String::as_str) == Some(heredoc::OPENER) {
            if spec.stdin.is_some() || spec.stdout.is_some() || spec.background {
                return Err(ParseError::HeredocConflict);
            }
            spec.argv.pop();
            spec.heredoc = true;
        }

        Ok(spec)
    }
}

/// Create-or-truncate, owner read/write and group/other read.
fn open_truncate(path: &str) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }
    opts.open(path)
}
