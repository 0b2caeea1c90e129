//! Interpreter state for one session.
//!
//! The spawn counter, the background registry and the last-result code
//! live here and are passed explicitly to every component. The status is
//! a typed field; the `result` environment variable is only a mirror for
//! child processes and `$result` lookups.

use std::env;

use crate::jobs::JobTable;

/// Environment variable mirroring the last command status.
pub const RESULT_VAR: &str = "result";

#[derive(Debug, Default)]
pub struct ShellState {
    forks: u32,
    pub jobs: JobTable,
    status: i32,
}

impl ShellState {
    pub fn new() -> ShellState {
        let mut state = ShellState::default();
        state.set_status(0);
        state
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    /// Record a command status and mirror it into the environment.
    pub fn set_status(&mut self, code: i32) {
        self.status = code;
        env::set_var(RESULT_VAR, code.to_string());
    }

    /// Processes created so far, foreground and background combined.
    pub fn forks(&self) -> u32 {
        self.forks
    }

    pub fn count_fork(&mut self) {
        self.forks += 1;
    }

    pub fn reset_forks(&mut self) {
        self.forks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_status_zero() {
        let state = ShellState::new();
        assert_eq!(state.status(), 0);
        assert_eq!(state.forks(), 0);
        assert!(state.jobs.is_empty());
    }

    #[test]
    fn status_is_mirrored_into_the_environment() {
        let mut state = ShellState::new();
        state.set_status(7);
        assert_eq!(state.status(), 7);
        // The mirror is process-wide; other tests may overwrite it, but
        // it must always hold a numeric status.
        assert!(env::var(RESULT_VAR).unwrap().parse::<i32>().is_ok());
    }

    #[test]
    fn fork_counter_counts_and_resets() {
        let mut state = ShellState::new();
        state.count_fork();
        state.count_fork();
        assert_eq!(state.forks(), 2);
        state.reset_forks();
        assert_eq!(state.forks(), 0);
    }
}
