//! SSH command execution
//!
//! Runs the report command on remote hosts via the system `ssh` client in
//! batch mode. Each call spawns its own `ssh` process; the process is killed
//! when the call times out or its future is dropped, so no connection
//! outlives the host check that opened it.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::CheckSettings;
use crate::models::Host;

/// Exit status `ssh` reports for its own (connection/auth) failures
const SSH_TRANSPORT_FAILURE: i32 = 255;

/// Errors that prevent a command from running to completion
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The `ssh` client could not be started
    #[error("Failed to spawn SSH process: {0}")]
    Spawn(#[source] std::io::Error),

    /// `ssh` could not connect or authenticate
    #[error("SSH connection to {destination} failed: {message}")]
    Connection {
        /// `user@host`
        destination: String,
        /// Trimmed stderr of the `ssh` process
        message: String,
    },

    /// The command did not finish within the per-host timeout
    #[error("Remote command on {destination} timed out after {secs}s")]
    Timeout {
        /// `user@host`
        destination: String,
        /// Configured timeout
        secs: u64,
    },
}

/// Captured result of a command that ran on the remote host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the remote command exited with status 0
    pub success: bool,
    /// Remote exit status, if the process exited normally
    pub exit_code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a command that exited with status 0
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output of a command that exited with a non-zero status
    #[must_use]
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs a shell command on a remote host.
///
/// `Err` means the command never completed (transport failure). A command
/// that ran but failed is `Ok` with [`CommandOutput::success`] set to false.
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    /// Runs `command` on `host` and waits for it to finish
    async fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, ExecError>;
}

/// [`RemoteExecutor`] backed by the OpenSSH client
#[derive(Debug, Clone)]
pub struct SshExecutor {
    program: String,
    connect_timeout_secs: u64,
    timeout_secs: u64,
}

impl SshExecutor {
    /// Creates an executor using `ssh` from `PATH`
    #[must_use]
    pub fn new(connect_timeout_secs: u64, timeout_secs: u64) -> Self {
        Self {
            program: "ssh".to_string(),
            connect_timeout_secs,
            timeout_secs,
        }
    }

    /// Creates an executor from the `check.*` settings
    #[must_use]
    pub fn from_settings(settings: &CheckSettings) -> Self {
        Self::new(settings.connect_timeout_secs, settings.timeout_secs)
    }

    /// Overrides the client binary
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to the client for `command` on `host`
    fn args(&self, host: &Host, command: &str) -> Vec<String> {
        vec![
            // Never prompt for passwords or passphrases
            "-o".into(),
            "BatchMode=yes".into(),
            "-o".into(),
            "StrictHostKeyChecking=accept-new".into(),
            "-o".into(),
            format!("ConnectTimeout={}", self.connect_timeout_secs),
            host.destination(),
            command.to_string(),
        ]
    }
}

#[async_trait]
impl RemoteExecutor for SshExecutor {
    async fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, ExecError> {
        let destination = host.destination();
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(host, command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(destination = %destination, command, "Running remote command");

        let timeout = Duration::from_secs(self.timeout_secs);
        let output = match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ExecError::Spawn(e)),
            Err(_) => {
                return Err(ExecError::Timeout {
                    destination,
                    secs: self.timeout_secs,
                });
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let exit_code = output.status.code();
        if exit_code == Some(SSH_TRANSPORT_FAILURE) {
            return Err(ExecError::Connection {
                destination,
                message: stderr,
            });
        }

        Ok(CommandOutput {
            success: output.status.success(),
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
        })
    }
}
