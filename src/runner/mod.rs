//! External test task invocation.
//!
//! The build tool is an opaque subprocess: it is started in the service
//! directory, its output is captured, and it is killed if it outlives the
//! timeout. Every failure mode is folded into a [`TestRunResult`] so a broken
//! or hanging build never stops the coverage report.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Default wall-clock limit for one test run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Prefix of the `error` field when a run was killed for exceeding its timeout.
pub const TIMEOUT_MARKER: &str = "timed out";

/// Exit code recorded when the process produced none (spawn failure, timeout,
/// termination by signal).
pub const NO_EXIT_CODE: i32 = -1;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Extra time to collect output from a child that exits at the deadline.
const OUTPUT_GRACE: Duration = Duration::from_millis(200);

/// Outcome of one external test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRunResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(rename = "return_code")]
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestRunResult {
    /// A run that could not complete (spawn error, timeout, I/O failure).
    pub fn failed(error: impl Into<String>) -> Self {
        TestRunResult {
            success: false,
            stdout: None,
            stderr: None,
            exit_code: NO_EXIT_CODE,
            error: Some(error.into()),
        }
    }

    pub fn timed_out(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|e| e.starts_with(TIMEOUT_MARKER))
    }
}

/// Something that can run a service's test task.
pub trait TestRunner {
    fn run(&self, service_dir: &Path) -> TestRunResult;
}

/// Runs the Gradle wrapper's test and JaCoCo report tasks.
#[derive(Debug, Clone)]
pub struct GradleRunner {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Default for GradleRunner {
    fn default() -> Self {
        GradleRunner::new(DEFAULT_TIMEOUT)
    }
}

impl GradleRunner {
    pub fn new(timeout: Duration) -> Self {
        GradleRunner::with_command(
            "./gradlew",
            &["test", "jacocoTestReport", "--no-daemon"],
            timeout,
        )
    }

    /// Use an arbitrary command line instead of the Gradle wrapper.
    pub fn with_command(program: &str, args: &[&str], timeout: Duration) -> Self {
        GradleRunner {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TestRunner for GradleRunner {
    fn run(&self, service_dir: &Path) -> TestRunResult {
        eprintln!(
            "note: running `{}` in {} (timeout {}s)",
            self.command_line(),
            service_dir.display(),
            self.timeout().as_secs()
        );

        let child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(service_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        match child {
            Ok(child) => wait_with_timeout(child, self.timeout),
            Err(err) => TestRunResult::failed(format!(
                "failed to execute {}: {err}",
                self.program
            )),
        }
    }
}

/// Drain a pipe on a helper thread so a chatty child never blocks on a full
/// pipe while we poll it. Chunks arrive on the returned channel, which
/// disconnects once the pipe reaches end of file.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let Some(mut pipe) = pipe else { return };
        let mut buf = [0u8; 8192];
        loop {
            match pipe.read(&mut buf) {
                // A read error just truncates the captured output.
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}

/// Collect what a drain thread produced until its pipe closes or `until`
/// passes. Returns the output and whether the pipe was read to the end.
fn collect_output(rx: &Receiver<Vec<u8>>, until: Instant) -> (String, bool) {
    let mut bytes = Vec::new();
    let complete = loop {
        match rx.recv_timeout(until.saturating_duration_since(Instant::now())) {
            Ok(chunk) => bytes.extend_from_slice(&chunk),
            Err(RecvTimeoutError::Disconnected) => break true,
            Err(RecvTimeoutError::Timeout) => break false,
        }
    };
    (String::from_utf8_lossy(&bytes).into_owned(), complete)
}

fn wait_with_timeout(mut child: Child, timeout: Duration) -> TestRunResult {
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());
    let deadline = Instant::now() + timeout;

    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                // Processes left behind by the child may hold the pipes open.
                // Output is read until the deadline (plus a short grace for a
                // child that exits right at it), never longer.
                let until = deadline.max(Instant::now() + OUTPUT_GRACE);
                let (out, out_complete) = collect_output(&stdout, until);
                let (err, err_complete) = collect_output(&stderr, until);
                if !(out_complete && err_complete) {
                    eprintln!(
                        "warning: test process output still open after exit, captured output may be truncated"
                    );
                }
                return TestRunResult {
                    success: status.success(),
                    stdout: Some(out),
                    stderr: Some(err),
                    exit_code: status.code().unwrap_or(NO_EXIT_CODE),
                    error: None,
                };
            }
            Ok(None) if Instant::now() >= deadline => {
                kill_and_reap(&mut child);
                // Grandchildren may still hold the pipes open, so the drain
                // threads are left to finish on their own.
                return TestRunResult::failed(format!(
                    "{TIMEOUT_MARKER} after {}s",
                    timeout.as_secs()
                ));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(err) => {
                kill_and_reap(&mut child);
                return TestRunResult::failed(format!(
                    "failed waiting for test process: {err}"
                ));
            }
        }
    }
}

fn kill_and_reap(child: &mut Child) {
    // Kill fails only if the child already exited; reap it either way.
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
