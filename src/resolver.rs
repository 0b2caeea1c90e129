//! Executable lookup.
//!
//! The literal argument is probed first, so `./script.sh` and absolute
//! paths run directly; otherwise each `PATH` directory is tried in order
//! and the first executable match wins.

use std::env;
use std::path::{Path, PathBuf};

/// Resolve a command name to the path that will be executed, or `None`
/// when nothing matches.
pub fn find_program(name: &str) -> Option<PathBuf> {
    let literal = Path::new(name);
    if is_executable(literal) {
        return Some(literal.to_path_buf());
    }

    let path_var = env::var("PATH").unwrap_or_default();
    for dir in path_var.split(':') {
        if dir.is_empty() {
            continue;
        }
        let candidate = Path::new(dir).join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn absolute_path_resolves_directly() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("tool");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        make_executable(&tool);

        assert_eq!(find_program(tool.to_str().unwrap()), Some(tool));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.txt");
        fs::write(&file, "not a program").unwrap();

        assert_eq!(find_program(file.to_str().unwrap()), None);
    }

    #[test]
    fn path_directories_are_searched_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        for dir in [&first, &second] {
            let tool = dir.path().join("mish-test-tool");
            fs::write(&tool, "#!/bin/sh\n").unwrap();
            #[cfg(unix)]
            make_executable(&tool);
        }

        let saved = env::var("PATH").unwrap_or_default();
        env::set_var(
            "PATH",
            format!("{}:{}", first.path().display(), second.path().display()),
        );
        let found = find_program("mish-test-tool");
        env::set_var("PATH", saved);

        assert_eq!(found, Some(first.path().join("mish-test-tool")));
    }

    #[test]
    fn unknown_command_is_none() {
        assert_eq!(find_program("definitely-not-a-real-command-xyz"), None);
    }
}
