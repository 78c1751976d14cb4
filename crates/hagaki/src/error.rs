use thiserror::Error;

use crate::vcard::parse::{DecodeError, ParseError};

/// Codec errors surfaced at the crate boundary.
#[derive(Error, Debug)]
pub enum CardError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

pub type CardResult<T> = std::result::Result<T, CardError>;

/// Signals that a single property or element cannot be built from its
/// source representation and should be omitted from the result.
///
/// Per-property processing loops catch this, record a warning, and continue
/// with the remaining properties; it never aborts a whole document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct Skip {
    reason: String,
}

impl Skip {
    /// Creates a skip signal with a human-readable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the reason this property was skipped.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
