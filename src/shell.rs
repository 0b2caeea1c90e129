//! The shell coordinator: one line in, one command out.
//!
//! Control flow per line: tokenize, capture a literal block if one was
//! opened, expand globs, resolve variables, run the opt-in background
//! sweep, then dispatch to a builtin or spawn the external program. A
//! line is processed to completion before the next is read.

use thiserror::Error;

use crate::builtins::{self, Builtin};
use crate::command::{CommandSpec, ParseError};
use crate::exec;
use crate::expand::{self, ExpandError};
use crate::heredoc;
use crate::lexer::{self, LexError};
use crate::state::ShellState;

/// Supplies raw continuation lines: the interactive editor, a script
/// file, piped stdin, or a fixed list in tests.
pub trait LineSource {
    /// Read one line without its trailing newline; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// A fixed sequence of lines, used for scripts, rc files and tests.
pub struct ScriptSource {
    lines: std::vec::IntoIter<String>,
}

impl ScriptSource {
    pub fn new(content: &str) -> ScriptSource {
        ScriptSource {
            lines: content
                .lines()
                .map(String::from)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineSource for ScriptSource {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.lines.next()
    }
}

/// What the driver should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Expand(#[from] ExpandError),
}

impl ShellError {
    /// Parse and usage errors force status 1; resolution and I/O
    /// failures abort the line but leave the previous status in place.
    fn forces_status(&self) -> bool {
        !matches!(
            self,
            ShellError::Parse(ParseError::Redirect { .. }) | ShellError::Expand(_)
        )
    }
}

#[derive(Debug, Default)]
pub struct Shell {
    pub state: ShellState,
}

impl Shell {
    pub fn new() -> Shell {
        Shell {
            state: ShellState::new(),
        }
    }

    /// Process one raw line to completion, reporting any error to stderr.
    pub fn run_line(&mut self, line: &str, lines: &mut dyn LineSource) -> Outcome {
        match self.execute(line, lines) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("mish: {}", err);
                if err.forces_status() {
                    self.state.set_status(1);
                }
                Outcome::Continue
            }
        }
    }

    /// Drive a whole line source to completion (scripts, `-c`, rc files).
    pub fn run_all(&mut self, source: &mut dyn LineSource) -> Outcome {
        while let Some(line) = source.read_line("") {
            if self.run_line(&line, source) == Outcome::Exit {
                return Outcome::Exit;
            }
        }
        Outcome::Continue
    }

    fn execute(
        &mut self,
        line: &str,
        lines: &mut dyn LineSource,
    ) -> Result<Outcome, ShellError> {
        let tokens = lexer::lex(line)?;
        let mut spec = CommandSpec::from_tokens(tokens)?;
        if spec.heredoc {
            spec.heredoc_body = Some(heredoc::capture(lines));
        }

        let argv = expand::expand_globs(std::mem::take(&mut spec.argv));
        if argv.is_empty() {
            // Assignment-only or blank line: nothing to run.
            return Ok(Outcome::Continue);
        }
        let argv = expand::resolve_vars(argv)?;

        self.state.jobs.reap_if_requested();

        if let Some(builtin) = Builtin::lookup(&argv[0]) {
            return Ok(builtins::run(builtin, &mut self.state, &argv[1..]));
        }

        exec::launch(&mut self.state, spec, argv);
        Ok(Outcome::Continue)
    }
}
