//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and file system I/O.
//!
//! ## Structure
//!
//! - `process` - Spawns the toolchain and deploy tool
//! - `workspace` - Reads the crate manifest and locates the target directory
//! - `artifact` - Measures and hashes the build output
//! - `events/` - Console and NDJSON event sinks

pub mod artifact;
pub mod events;
pub mod process;
pub mod workspace;

// Re-export for convenience
pub use artifact::inspect_artifact;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use process::SystemProcessRunner;
pub use workspace::{package_name, target_dir};
