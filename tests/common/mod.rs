//! Shared helpers for mish integration tests.

pub use mish::{Outcome, ScriptSource, Shell};

/// Run one line with no continuation input available.
pub fn run(shell: &mut Shell, line: &str) -> Outcome {
    let mut lines = ScriptSource::new("");
    shell.run_line(line, &mut lines)
}

/// Run one line with heredoc continuation lines available.
#[allow(dead_code)]
pub fn run_with_input(shell: &mut Shell, line: &str, input: &str) -> Outcome {
    let mut lines = ScriptSource::new(input);
    shell.run_line(line, &mut lines)
}
