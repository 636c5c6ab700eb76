//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod account;
mod build_profile;
mod run_state;

pub use account::TargetAccount;
pub use build_profile::BuildProfile;
pub use run_state::{RunState, Step};
