//! Run Use Case
//!
//! Fail-fast, two-step sequential execution:
//! 1. Compile the contract (`Building`)
//! 2. Deploy the artifact (`Deploying`), only if step 1 exited zero
//!
//! The first non-zero exit code ends the run and becomes its result.

mod use_case;


pub use use_case::{DeployRunner, RunReport};
