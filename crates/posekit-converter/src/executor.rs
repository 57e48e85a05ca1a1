//! External process execution.
//!
//! Runs the converter (and the Python probe/installer) as child processes,
//! capturing stdout, stderr, and the exit code.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, error, info};

use crate::error::ConversionError;
use crate::models::ConversionOutcome;

/// Parameters for one process execution.
#[derive(Debug, Clone)]
pub struct ExecutionParams {
    /// Program to run.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Kill the process after this long. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ExecutionParams {
    /// Parameters for `program` with `args` and no timeout.
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: None,
        }
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Executor for external commands.
#[derive(Debug, Clone, Default)]
pub struct ConversionExecutor;

impl ConversionExecutor {
    /// Create a new executor.
    pub fn new() -> Self {
        Self
    }

    /// Run a process to completion and capture its output.
    ///
    /// A non-zero exit is not an error here; callers inspect
    /// [`ConversionOutcome::success`]. Spawn failures are returned as
    /// [`ConversionError::Io`].
    pub async fn execute(
        &self,
        params: &ExecutionParams,
    ) -> Result<ConversionOutcome, ConversionError> {
        let start = Instant::now();

        debug!(
            program = %params.program.display(),
            args = ?params.args,
            timeout_s = params.timeout.map(|t| t.as_secs()),
            "Spawning process"
        );

        let mut cmd = Command::new(&params.program);
        cmd.args(&params.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn()?;

        // Dropping the future on timeout drops the child, which kills it.
        let output = match params.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, child.wait_with_output()).await {
                Ok(result) => result?,
                Err(_) => {
                    error!(
                        program = %params.program.display(),
                        timeout_s = timeout.as_secs(),
                        "Process timed out, killing"
                    );
                    return Err(ConversionError::Timeout {
                        timeout_seconds: timeout.as_secs(),
                    });
                }
            },
            None => child.wait_with_output().await?,
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !stderr.is_empty() {
            debug!(stderr = %stderr, "Process stderr output");
        }

        info!(
            program = %params.program.display(),
            exit_code = ?output.status.code(),
            duration_ms,
            "Process finished"
        );

        Ok(ConversionOutcome {
            success: output.status.success(),
            stdout,
            stderr,
            exit_code: output.status.code(),
            duration_ms,
        })
    }
}
