//! JSON Event Sink
//!
//! Outputs run events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RunEvent, RunEventSink};
use crate::domain::value_objects::RunState;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert("command".to_string(), self.command.into());
            object.insert(
                "timestamp".to_string(),
                chrono::Utc::now().to_rfc3339().into(),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for JsonEventSink {
    fn on_event(&self, event: RunEvent) {
        let json = match event {
            RunEvent::Started { account, artifact } => serde_json::json!({
                "event": "start",
                "account": account,
                "artifact": artifact.display().to_string(),
                "version": env!("CARGO_PKG_VERSION"),
            }),

            RunEvent::StepStarted { step, command } => serde_json::json!({
                "event": "step_start",
                "step": step,
                "cmdline": command,
            }),

            RunEvent::StepFinished { step, exit_code } => serde_json::json!({
                "event": "step_finish",
                "step": step,
                "exit_code": exit_code,
                "success": exit_code == 0,
            }),

            RunEvent::ArtifactReady { path, size, sha256 } => serde_json::json!({
                "event": "artifact",
                "path": path.display().to_string(),
                "size": size,
                "sha256": sha256,
            }),

            RunEvent::ArtifactMissing { path } => serde_json::json!({
                "event": "artifact_missing",
                "path": path.display().to_string(),
            }),

            RunEvent::ArtifactUnreadable { path, error } => serde_json::json!({
                "event": "artifact_unreadable",
                "path": path.display().to_string(),
                "error": error,
            }),

            RunEvent::Completed { state, exit_code } => {
                let failed_step = match state {
                    RunState::Failed(step) => Some(step),
                    _ => None,
                };
                serde_json::json!({
                    "event": "complete",
                    "success": state == RunState::Succeeded,
                    "state": state.label(),
                    "failed_step": failed_step,
                    "exit_code": exit_code,
                })
            }
        };

        self.write_event(json);
    }
}
