//! Console Event Sink
//!
//! Human-readable progress lines. Icons are used only when stdout is a
//! terminal so piped logs stay plain ASCII.

use crate::domain::ports::{RunEvent, RunEventSink};
use crate::domain::value_objects::{RunState, Step};
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::sync::Mutex;

struct Icons {
    start: &'static str,
    step: &'static str,
    ok: &'static str,
    fail: &'static str,
    warn: &'static str,
}

const UNICODE_ICONS: Icons = Icons {
    start: "🚀",
    step: "▶",
    ok: "✓",
    fail: "✗",
    warn: "⚠",
};

const ASCII_ICONS: Icons = Icons {
    start: "==>",
    step: "->",
    ok: "[ok]",
    fail: "[failed]",
    warn: "[warn]",
};

/// Event sink that prints progress for humans
pub struct ConsoleEventSink {
    icons: &'static Icons,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Print to stdout, with icons if stdout is a terminal
    pub fn stdout() -> Self {
        let unicode = io::stdout().is_terminal();
        Self::with_writer(io::stdout(), unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, unicode: bool) -> Self {
        Self {
            icons: if unicode { &UNICODE_ICONS } else { &ASCII_ICONS },
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl RunEventSink for ConsoleEventSink {
    fn on_event(&self, event: RunEvent) {
        let icons = self.icons;
        let text = match event {
            RunEvent::Started {
                account: Some(account),
                artifact,
            } => format!(
                "{} Deploying {} to {}",
                icons.start,
                artifact.display(),
                account
            ),
            RunEvent::Started {
                account: None,
                artifact,
            } => format!("{} Building {}", icons.start, artifact.display()),

            RunEvent::StepStarted { step, command } => {
                format!("{} {}: {}", icons.step, step, command)
            }

            RunEvent::StepFinished { step, exit_code: 0 } => {
                format!("{} {} finished", icons.ok, step)
            }
            RunEvent::StepFinished { step, exit_code } => {
                format!("{} {} exited with code {}", icons.fail, step, exit_code)
            }

            RunEvent::ArtifactReady { path, size, sha256 } => format!(
                "  {} ({} bytes, sha256 {})",
                path.display(),
                size,
                sha256
            ),

            RunEvent::ArtifactMissing { path } => format!(
                "{} artifact not found at {}",
                icons.warn,
                path.display()
            ),

            RunEvent::ArtifactUnreadable { path, error } => format!(
                "{} cannot read artifact {}: {}",
                icons.warn,
                path.display(),
                error
            ),

            RunEvent::Completed {
                state: RunState::Succeeded,
                ..
            } => format!("{} Done", icons.ok),
            RunEvent::Completed {
                state: RunState::Failed(Step::Build),
                exit_code,
            } => format!(
                "{} Build failed (exit {}), nothing was deployed",
                icons.fail, exit_code
            ),
            RunEvent::Completed {
                state: RunState::Failed(Step::Deploy),
                exit_code,
            } => format!("{} Deploy failed (exit {})", icons.fail, exit_code),
            RunEvent::Completed { state, exit_code } => {
                format!("{} Stopped while {} (exit {})", icons.warn, state.label(), exit_code)
            }
        };

        self.line(text);
    }
}
