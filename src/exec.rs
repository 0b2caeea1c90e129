//! External process launching.
//!
//! The child's descriptors are wired before spawn: stdin from the
//! redirect file, a pipe carrying the heredoc body, or `/dev/null` for
//! background commands; stdout to the redirect file. Foreground commands
//! are awaited and their exact exit status recorded; background commands
//! are registered and announced immediately.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::command::CommandSpec;
use crate::resolver;
use crate::state::ShellState;

/// Spawn the external command described by `spec`, with `argv` already
/// expanded. Failures are reported here; a creation failure leaves both
/// the status and the spawn counter untouched.
pub fn launch(state: &mut ShellState, spec: CommandSpec, argv: Vec<String>) {
    let program = match resolver::find_program(&argv[0]) {
        Some(path) => path,
        None => {
            eprintln!("mish: command not found: {}", argv[0]);
            state.set_status(1);
            return;
        }
    };

    let mut cmd = Command::new(program);
    cmd.args(&argv[1..]);

    if spec.heredoc {
        cmd.stdin(Stdio::piped());
    } else if let Some(file) = spec.stdin {
        cmd.stdin(Stdio::from(file));
    } else if spec.background {
        cmd.stdin(Stdio::null());
    }
    if let Some(file) = spec.stdout {
        cmd.stdout(Stdio::from(file));
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            // Creation failure: reported, no further effect.
            eprintln!("mish: {}: {}", argv[0], err);
            return;
        }
    };
    state.count_fork();

    if let Some(body) = spec.heredoc_body {
        if let Some(mut stdin) = child.stdin.take() {
            // The write end closes when `stdin` drops, before we wait.
            let _ = stdin.write_all(body.as_bytes());
        }
    }

    if spec.background {
        let (id, pid) = state.jobs.register(child);
        println!("[{}] {}", id, pid);
        state.set_status(0);
    } else {
        match child.wait() {
            // Abnormal termination has no exit code; report it as 1.
            Ok(status) => state.set_status(status.code().unwrap_or(1)),
            Err(err) => {
                eprintln!("mish: wait: {}", err);
                state.set_status(1);
            }
        }
    }
}
