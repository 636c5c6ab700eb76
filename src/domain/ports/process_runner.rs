//! Process Runner Port
//!
//! Runs one external command to completion and reports its exit code.

use crate::domain::entities::CommandSpec;

/// Exit code a shell reports when the program is not on `PATH`
pub const NOT_FOUND_EXIT_CODE: i32 = 127;
/// Exit code a shell reports when the program exists but cannot be started
pub const CANNOT_EXECUTE_EXIT_CODE: i32 = 126;

/// Error starting a process (not a non-zero exit, which is a normal outcome)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// Program not found on `PATH`
    NotFound(String),
    /// Program could not be spawned or waited on
    Spawn { program: String, message: String },
}

impl ProcessError {
    /// Exit code the run reports for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => NOT_FOUND_EXIT_CODE,
            Self::Spawn { .. } => CANNOT_EXECUTE_EXIT_CODE,
        }
    }
}

impl std::fmt::Display for ProcessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(program) => write!(f, "'{}' not found on PATH", program),
            Self::Spawn { program, message } => {
                write!(f, "failed to run '{}': {}", program, message)
            }
        }
    }
}

impl std::error::Error for ProcessError {}

/// Executes external commands
///
/// Implementations pass the child's output through untouched; the runner
/// only looks at the exit code.
pub trait ProcessRunner: Send + Sync {
    /// Run `command` to completion and return its exit code
    fn run(&self, command: &CommandSpec) -> Result<i32, ProcessError>;
}
