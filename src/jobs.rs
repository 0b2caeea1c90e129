//! Background process registry and the opt-in reaper.
//!
//! Background children are kept with their `Child` handle so they can be
//! force-terminated and reaped later. While the `KILLBACK` variable is
//! set, every subsequent command line first kills and reaps the whole
//! registry; the same sweep runs on interpreter shutdown so no children
//! outlive the session.

use std::env;
use std::process::Child;

/// Opt-in switch for the per-line reap sweep.
pub const KILLBACK_VAR: &str = "KILLBACK";

#[derive(Debug)]
pub struct Job {
    pub id: usize,
    pub pid: u32,
    child: Child,
}

#[derive(Debug)]
pub struct JobTable {
    jobs: Vec<Job>,
    next_id: usize,
}

impl Default for JobTable {
    fn default() -> Self {
        JobTable {
            jobs: Vec::new(),
            next_id: 1,
        }
    }
}

impl JobTable {
    /// Register a freshly spawned background child, returning its job id
    /// and process id.
    pub fn register(&mut self, child: Child) -> (usize, u32) {
        let id = self.next_id;
        self.next_id += 1;
        let pid = child.id();
        self.jobs.push(Job { id, pid, child });
        (id, pid)
    }

    /// Registered process ids, in registration order.
    pub fn pids(&self) -> impl Iterator<Item = u32> + '_ {
        self.jobs.iter().map(|job| job.pid)
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Kill-and-reap once per line while the opt-in variable is set.
    pub fn reap_if_requested(&mut self) {
        if env::var_os(KILLBACK_VAR).is_some() {
            self.kill_all();
        }
    }

    /// Force-terminate every registered process (already-exited ones are
    /// fine), reap each one, and clear the registry.
    pub fn kill_all(&mut self) {
        for mut job in self.jobs.drain(..) {
            if let Err(err) = kill_job(&mut job) {
                eprintln!("mish: kill {}: {}", job.pid, err);
            }
            let _ = job.child.wait();
        }
    }

    /// Shutdown sweep: nothing survives the interpreter.
    pub fn shutdown(&mut self) {
        if !self.jobs.is_empty() {
            self.kill_all();
        }
    }
}

#[cfg(unix)]
fn kill_job(job: &mut Job) -> Result<(), String> {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    match kill(Pid::from_raw(job.pid as i32), Signal::SIGKILL) {
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(not(unix))]
fn kill_job(job: &mut Job) -> Result<(), String> {
    match job.child.kill() {
        Ok(()) => Ok(()),
        // Already exited.
        Err(err) if err.kind() == std::io::ErrorKind::InvalidInput => Ok(()),
        Err(err) => Err(err.to_string()),
    }
}
