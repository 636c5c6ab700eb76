//! Run State Value Object
//!
//! `Building -> Deploying -> Succeeded`, or `Failed` at the step that broke.

use std::fmt;

use serde::Serialize;

/// One of the two external steps of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Build,
    Deploy,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => f.write_str("build"),
            Self::Deploy => f.write_str("deploy"),
        }
    }
}

/// Position of a run in the build-then-deploy sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Building,
    Deploying,
    Succeeded,
    Failed(Step),
}

impl RunState {
    /// Advance after the current step exited with `code`.
    ///
    /// Terminal states stay where they are.
    pub fn advance(self, code: i32) -> Self {
        match (self, code) {
            (Self::Building, 0) => Self::Deploying,
            (Self::Building, _) => Self::Failed(Step::Build),
            (Self::Deploying, 0) => Self::Succeeded,
            (Self::Deploying, _) => Self::Failed(Step::Deploy),
            (terminal, _) => terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Deploying => "deploying",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}
