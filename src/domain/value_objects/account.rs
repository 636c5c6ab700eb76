//! Target Account Value Object
//!
//! The on-chain account that will host the deployed contract binary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RunnerError;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 64;

/// A validated account identifier (e.g. `contractspace.testnet`)
///
/// Follows NEAR account-id rules:
/// - 2 to 64 characters
/// - lowercase ASCII letters, digits and the separators `-`, `_`, `.`
/// - separators never lead, trail or sit next to each other
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetAccount(String);

impl TargetAccount {
    /// Validate and wrap an account id
    pub fn parse(value: impl Into<String>) -> Result<Self, RunnerError> {
        let value = value.into();
        match validate(&value) {
            Ok(()) => Ok(Self(value)),
            Err(reason) => Err(RunnerError::InvalidAccount {
                value,
                reason: reason.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.')
}

fn validate(value: &str) -> Result<(), &'static str> {
    if value.len() < MIN_LEN {
        return Err("must be at least 2 characters");
    }
    if value.len() > MAX_LEN {
        return Err("must be at most 64 characters");
    }

    let mut prev_separator = true;
    for c in value.chars() {
        if is_separator(c) {
            if prev_separator {
                return Err("separators cannot lead or repeat");
            }
            prev_separator = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
        } else {
            return Err("only lowercase letters, digits, '-', '_' and '.' are allowed");
        }
    }

    if prev_separator {
        return Err("cannot end with a separator");
    }
    Ok(())
}

impl FromStr for TargetAccount {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TargetAccount {
    type Error = RunnerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TargetAccount> for String {
    fn from(account: TargetAccount) -> Self {
        account.0
    }
}

impl AsRef<str> for TargetAccount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
