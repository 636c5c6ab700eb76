//! Domain Ports
//!
//! Interfaces the runner depends on; implementations live in `infrastructure`.

mod process_runner;
mod run_events;

pub use process_runner::{ProcessError, ProcessRunner};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink};
