//! Error types shared across the workspace.

use std::error::Error;
use std::fmt;

/// A textual balance mode did not name any known mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBalanceModeError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseBalanceModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown balance mode '{}', expected relaxed, exact or restrictive",
            self.input
        )
    }
}

impl Error for ParseBalanceModeError {}
