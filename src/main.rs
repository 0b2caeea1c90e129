//! mish - a line-at-a-time command interpreter.
//!
//! Usage:
//!   mish              Start the interactive prompt
//!   mish -c "cmd"     Run a single command line
//!   mish script       Run a file line by line

use std::fs;
use std::io::{self, BufRead};
use std::process::ExitCode;

use mish::repl;
use mish::shell::{LineSource, Outcome, ScriptSource, Shell};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"mish {} - a line-at-a-time command interpreter

USAGE:
    mish                    Start the interactive prompt
    mish -c <command>       Run a single command line and exit
    mish <script>           Run a file line by line and exit
    mish --help             Show this help message
    mish --version          Show the version

SYNTAX:
    name=value              Assign an environment variable
    $name                   Expand a variable (whole token)
    *.txt ? [..]            Glob expansion against the filesystem
    < file  > file          Redirect stdin / stdout
    cmd args &              Run in the background
    cmd HERE{{               Literal block: lines up to a lone }} become stdin

BUILTINS:
    cd [dir]                Change directory (HOME without an argument)
    exit                    Leave the interpreter
    pidsbg                  List background process ids
    nforks [-r]             Show (or reset) the spawn counter

STARTUP:
    ~/.mishrc               Executed before the first prompt (if present)
    ~/.mish_history         Raw lines of successful sessions

The KILLBACK variable, once set, makes every following command line
kill and reap all background processes first."#,
        VERSION
    );
}

/// Lines from stdin, for `-c` heredoc continuation and piped input.
struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while buf.ends_with('\n') || buf.ends_with('\r') {
                    buf.pop();
                }
                Some(buf)
            }
        }
    }
}

fn exit_code(status: i32) -> ExitCode {
    ExitCode::from(status.clamp(0, 255) as u8)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            let mut shell = Shell::new();
            exit_code(repl::run(&mut shell))
        }
        Some("--help") | Some("-h") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some("--version") | Some("-V") => {
            println!("mish {}", VERSION);
            ExitCode::SUCCESS
        }
        Some("-c") => {
            let Some(command) = args.get(1) else {
                eprintln!("mish: -c requires a command string");
                return ExitCode::from(2);
            };
            let mut shell = Shell::new();
            let mut stdin = StdinSource;
            let outcome = shell.run_line(command, &mut stdin);
            shell.state.jobs.shutdown();
            match outcome {
                // `exit` always leaves with status 0.
                Outcome::Exit => ExitCode::SUCCESS,
                Outcome::Continue => exit_code(shell.state.status()),
            }
        }
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    eprintln!("mish: {}: {}", path, err);
                    return ExitCode::from(2);
                }
            };
            let mut shell = Shell::new();
            let mut source = ScriptSource::new(&content);
            let outcome = shell.run_all(&mut source);
            shell.state.jobs.shutdown();
            match outcome {
                Outcome::Exit => ExitCode::SUCCESS,
                Outcome::Continue => exit_code(shell.state.status()),
            }
        }
    }
}
