//! Startup file support.
//!
//! If `~/.mishrc` exists, its lines run through the normal interpreter
//! before the first prompt. Blank lines and `#` comment lines are
//! tolerated so the file can be annotated; everything else is an
//! ordinary command line.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::shell::{Outcome, ScriptSource, Shell};

pub const FILE_NAME: &str = ".mishrc";

pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Execute the rc file if present. An `exit` in the rc file is honored.
pub fn load_rc(shell: &mut Shell) -> Outcome {
    let Some(path) = dirs_home().map(|home| home.join(FILE_NAME)) else {
        return Outcome::Continue;
    };
    let Ok(content) = fs::read_to_string(&path) else {
        return Outcome::Continue;
    };

    let body: Vec<&str> = content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .collect();

    let mut source = ScriptSource::new(&body.join("\n"));
    shell.run_all(&mut source)
}
