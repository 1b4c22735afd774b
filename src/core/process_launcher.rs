use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    pub fn executable(path: impl Into<PathBuf>) -> Self {
        Self {
            program: path.into(),
            args: Vec::new(),
        }
    }

    pub fn script(interpreter: impl AsRef<OsStr>, script: &Path) -> Self {
        Self {
            program: PathBuf::from(interpreter.as_ref()),
            args: vec![script.as_os_str().to_os_string()],
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub command: LaunchCommand,
    pub count: u32,
}

impl LaunchRequest {
    pub fn new(command: LaunchCommand, count: u32) -> Self {
        Self { command, count }
    }

    /// Request built from the form fields. An empty path means the picker
    /// was cancelled or never used, so there is nothing to launch.
    pub fn from_input(path: &str, count: u32) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        Some(Self::new(LaunchCommand::executable(path), count))
    }
}

/// Starts processes. The real implementation goes to the OS; tests swap in
/// a recorder.
pub trait Spawner {
    fn spawn(&self, command: &LaunchCommand) -> io::Result<u32>;
}

pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, command: &LaunchCommand) -> io::Result<u32> {
        // The child handle is dropped right away; the process keeps running.
        let child = Command::new(&command.program).args(&command.args).spawn()?;
        Ok(child.id())
    }
}

#[derive(Debug)]
pub struct LaunchFailure {
    /// 1-based attempt number.
    pub attempt: u32,
    pub error: io::Error,
}

#[derive(Debug, Default)]
pub struct LaunchReport {
    pub attempted: u32,
    pub pids: Vec<u32>,
    pub failures: Vec<LaunchFailure>,
}

impl LaunchReport {
    pub fn succeeded(&self) -> usize {
        self.pids.len()
    }
}

/// Makes exactly `request.count` attempts in sequence. A failed attempt is
/// recorded and the remaining ones still run.
pub fn launch(spawner: &dyn Spawner, request: &LaunchRequest) -> LaunchReport {
    let mut report = LaunchReport::default();

    for attempt in 1..=request.count {
        report.attempted += 1;
        match spawner.spawn(&request.command) {
            Ok(pid) => {
                info!(
                    "Started {} ({}/{}), pid {}",
                    request.command, attempt, request.count, pid
                );
                report.pids.push(pid);
            }
            Err(e) => {
                error!(
                    "Failed to start {} ({}/{}): {}",
                    request.command, attempt, request.count, e
                );
                report.failures.push(LaunchFailure { attempt, error: e });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Fails on the attempts listed in `fail_on` (1-based).
    struct FakeSpawner {
        calls: Cell<u32>,
        fail_on: Vec<u32>,
        seen: RefCell<Vec<LaunchCommand>>,
    }

    impl FakeSpawner {
        fn new(fail_on: Vec<u32>) -> Self {
            Self {
                calls: Cell::new(0),
                fail_on,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Spawner for FakeSpawner {
        fn spawn(&self, command: &LaunchCommand) -> io::Result<u32> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            self.seen.borrow_mut().push(command.clone());
            if self.fail_on.contains(&n) {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            } else {
                Ok(1000 + n)
            }
        }
    }

    #[test]
    fn failure_does_not_stop_remaining_attempts() {
        let spawner = FakeSpawner::new(vec![2]);
        let request = LaunchRequest::from_input("C:/WeChat/WeChat.exe", 3).unwrap();

        let report = launch(&spawner, &request);

        assert_eq!(spawner.calls.get(), 3);
        assert_eq!(report.attempted, 3);
        assert_eq!(report.pids, vec![1001, 1003]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].attempt, 2);
        assert_eq!(report.failures[0].error.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn every_attempt_uses_the_same_command() {
        let spawner = FakeSpawner::new(vec![]);
        let request = LaunchRequest::from_input("  /opt/chat  ", 2).unwrap();

        let report = launch(&spawner, &request);

        assert!(report.failures.is_empty());
        assert_eq!(report.succeeded(), 2);
        let seen = spawner.seen.borrow();
        assert!(seen.iter().all(|c| c.program == Path::new("/opt/chat") && c.args.is_empty()));
    }

    #[test]
    fn empty_path_produces_no_request() {
        assert!(LaunchRequest::from_input("", 5).is_none());
        assert!(LaunchRequest::from_input("   ", 5).is_none());
    }

    #[test]
    fn zero_count_makes_no_attempts() {
        let spawner = FakeSpawner::new(vec![]);
        let report = launch(&spawner, &LaunchRequest::from_input("/opt/chat", 0).unwrap());
        assert_eq!(spawner.calls.get(), 0);
        assert_eq!(report.attempted, 0);
    }

    #[test]
    fn script_command_passes_script_as_single_argument() {
        let cmd = LaunchCommand::script("python", Path::new("/tmp/tool.py"));
        assert_eq!(cmd.program, PathBuf::from("python"));
        assert_eq!(cmd.args, vec![OsString::from("/tmp/tool.py")]);
        assert_eq!(cmd.to_string(), "python /tmp/tool.py");
    }

    #[test]
    fn system_spawner_reports_missing_program() {
        let cmd = LaunchCommand::executable("/definitely/not/here/multi-opener-test");
        let err = SystemSpawner.spawn(&cmd).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
