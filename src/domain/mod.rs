//! Domain Layer
//!
//! Pure deployment logic without process or file system access.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (TargetAccount, BuildProfile, RunState)
//! - `entities/` - Command lines, the deploy plan and artifact metadata
//! - `ports/` - Interface definitions for infrastructure (process runner, event sink)

pub mod entities;
pub mod ports;
pub mod value_objects;
