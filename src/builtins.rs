//! In-process commands: `cd`, `exit`, `pidsbg`, `nforks`.
//!
//! Builtins run in the interpreter's own process and mirror their status
//! exactly like external commands do.

use std::env;
use std::path::PathBuf;

use crate::shell::Outcome;
use crate::state::ShellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Exit,
    PidsBg,
    NForks,
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "cd" => Some(Builtin::Cd),
            "exit" => Some(Builtin::Exit),
            "pidsbg" => Some(Builtin::PidsBg),
            "nforks" => Some(Builtin::NForks),
            _ => None,
        }
    }
}

/// Execute a builtin with the arguments after the command name.
/// `exit` is signalled to the driver so owned resources are released on
/// the way out.
pub fn run(builtin: Builtin, state: &mut ShellState, args: &[String]) -> Outcome {
    match builtin {
        Builtin::Cd => cd(state, args),
        Builtin::Exit => return Outcome::Exit,
        Builtin::PidsBg => pidsbg(state, args),
        Builtin::NForks => nforks(state, args),
    }
    Outcome::Continue
}

fn cd(state: &mut ShellState, args: &[String]) {
    let target = match args.first() {
        Some(dir) => PathBuf::from(dir),
        None => match env::var("HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => {
                eprintln!("mish: cd: HOME is not set");
                state.set_status(1);
                return;
            }
        },
    };

    match env::set_current_dir(&target) {
        Ok(()) => state.set_status(0),
        Err(err) => {
            eprintln!("mish: cd: {}: {}", target.display(), err);
            state.set_status(1);
        }
    }
}

fn pidsbg(state: &mut ShellState, args: &[String]) {
    if !args.is_empty() {
        eprintln!("usage: pidsbg");
        state.set_status(1);
        return;
    }
    for pid in state.jobs.pids() {
        println!("{}", pid);
    }
    state.set_status(0);
}

fn nforks(state: &mut ShellState, args: &[String]) {
    match args {
        [] => println!("{}", state.forks()),
        [flag] if flag == "-r" => state.reset_forks(),
        _ => {
            eprintln!("usage: nforks [-r]");
            state.set_status(1);
            return;
        }
    }
    state.set_status(0);
}
