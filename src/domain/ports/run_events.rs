//! Run Event Port
//!
//! Observable progress of a build/deploy run, for console output and
//! NDJSON event streams.

use std::path::PathBuf;

use crate::domain::value_objects::{RunState, Step};

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Run started (`account` is `None` for build-only runs)
    Started {
        account: Option<String>,
        artifact: PathBuf,
    },

    /// An external step is about to be spawned
    StepStarted { step: Step, command: String },

    /// An external step exited
    StepFinished { step: Step, exit_code: i32 },

    /// Build output exists
    ArtifactReady {
        path: PathBuf,
        size: u64,
        sha256: String,
    },

    /// Build exited zero but the expected artifact is not there
    ArtifactMissing { path: PathBuf },

    /// Artifact exists but could not be read
    ArtifactUnreadable { path: PathBuf, error: String },

    /// Run reached a terminal state
    Completed { state: RunState, exit_code: i32 },
}

/// Trait for receiving run events
pub trait RunEventSink: Send + Sync {
    /// Handle a run event
    fn on_event(&self, event: RunEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RunEventSink for NoopEventSink {
    fn on_event(&self, _event: RunEvent) {}
}
