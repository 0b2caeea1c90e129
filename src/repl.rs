//! Interactive read loop.
//!
//! One line is read, handed to the history collaborator when the
//! previous status was success, then processed to completion before the
//! next prompt. Heredoc continuation lines come from the same editor
//! under the `--> ` prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::history::History;
use crate::rcfile;
use crate::shell::{LineSource, Outcome, Shell};

const PROMPT: &str = "mish> ";

struct EditorSource {
    rl: DefaultEditor,
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.rl.readline(prompt) {
            Ok(line) => Some(line),
            // Ctrl-C abandons the current line, not the shell.
            Err(ReadlineError::Interrupted) => Some(String::new()),
            Err(ReadlineError::Eof) => None,
            Err(err) => {
                eprintln!("mish: readline: {}", err);
                None
            }
        }
    }
}

/// Run the interactive shell until `exit` or end of input. Returns the
/// process exit status.
pub fn run(shell: &mut Shell) -> i32 {
    let mut history = match History::default_path() {
        Some(path) => match History::create(&path) {
            Ok(history) => history,
            Err(err) => {
                eprintln!("mish: {}: {}", path.display(), err);
                return 1;
            }
        },
        None => {
            eprintln!("mish: HOME is not set");
            return 1;
        }
    };

    if rcfile::load_rc(shell) == Outcome::Exit {
        shell.state.jobs.shutdown();
        return 0;
    }

    let rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("mish: terminal: {}", err);
            return 1;
        }
    };
    let mut source = EditorSource { rl };

    loop {
        let Some(line) = source.read_line(PROMPT) else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = source.rl.add_history_entry(&line);

        if shell.state.status() == 0 {
            history.record(&line);
        }
        if shell.run_line(&line, &mut source) == Outcome::Exit {
            break;
        }
    }

    shell.state.jobs.shutdown();
    0
}
