//! System Process Runner
//!
//! Spawns external commands with `std::process::Command`, passing their
//! output through verbatim.

use std::io::{self, ErrorKind};
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::entities::CommandSpec;
use crate::domain::ports::{ProcessError, ProcessRunner};

/// Runs commands on the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner {
    /// Send the child's stdout to our stderr (keeps stdout clean for NDJSON)
    stdout_to_stderr: bool,
}

impl SystemProcessRunner {
    /// Child inherits stdin, stdout and stderr
    pub fn inherit() -> Self {
        Self {
            stdout_to_stderr: false,
        }
    }

    /// Child stdout is redirected to stderr
    pub fn for_json() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<i32, ProcessError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(io::stderr()));
        } else {
            cmd.stdout(Stdio::inherit());
        }

        tracing::debug!(program = %command.program, cwd = %command.cwd.display(), "spawning");

        let status = cmd.status().map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProcessError::NotFound(command.program.clone()),
            _ => ProcessError::Spawn {
                program: command.program.clone(),
                message: e.to_string(),
            },
        })?;

        Ok(exit_code(status))
    }
}

/// Exit code of a finished child; signal deaths follow the `128 + n` convention
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
