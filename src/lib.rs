//! mish - a line-at-a-time command interpreter.
//!
//! # Overview
//!
//! One line in, one command out. Each input line is tokenized on
//! whitespace (inline `name=value` assignments, `<`/`>` redirection, a
//! trailing `&`, the `HERE{` literal block), glob- and
//! variable-expanded, and then either dispatched to a builtin running in
//! this process or spawned as an external program with its descriptors
//! wired up. Background children are tracked in a registry that the
//! `KILLBACK` opt-in sweeps clean before each command line.
//!
//! There is no pipeline syntax, no quoting grammar and no job control
//! beyond the background registry; a line holds at most one command.
//!
//! # Example
//!
//! ```rust
//! use mish::{Outcome, ScriptSource, Shell};
//!
//! let mut shell = Shell::new();
//! let mut lines = ScriptSource::new("");
//! let outcome = shell.run_line("true", &mut lines);
//! assert_eq!(outcome, Outcome::Continue);
//! assert_eq!(shell.state.status(), 0);
//! ```

pub mod builtins;
pub mod command;
pub mod exec;
pub mod expand;
pub mod heredoc;
pub mod history;
pub mod jobs;
pub mod lexer;
pub mod rcfile;
pub mod repl;
pub mod resolver;
pub mod shell;
pub mod state;

// Re-export commonly used items
pub use builtins::Builtin;
pub use command::{CommandSpec, ParseError};
pub use expand::ExpandError;
pub use history::History;
pub use jobs::JobTable;
pub use lexer::{lex, LexError, Token};
pub use shell::{LineSource, Outcome, ScriptSource, Shell, ShellError};
pub use state::ShellState;
