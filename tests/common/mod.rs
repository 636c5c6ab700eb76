//! Common test utilities for wasmship CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with fake `cargo`/`near` tools
//! - Fixtures: Reusable manifest and config content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
