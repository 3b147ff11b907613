use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two compared documents a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocSide {
    A,
    B,
}

impl fmt::Display for DocSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocSide::A => write!(f, "document A"),
            DocSide::B => write!(f, "document B"),
        }
    }
}

/// Input rejected before any scoring took place.
///
/// Every other input, including empty strings, produces a score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Bytes are not valid UTF-8
    #[error("{side} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidEncoding { side: DocSide, valid_up_to: usize },

    /// Document exceeds the configured byte limit
    #[error("{side} is {len} bytes, limit is {limit}")]
    TooLarge { side: DocSide, len: usize, limit: usize },
}

impl InputError {
    /// The document that was rejected
    pub fn side(&self) -> DocSide {
        match self {
            InputError::InvalidEncoding { side, .. } => *side,
            InputError::TooLarge { side, .. } => *side,
        }
    }
}

/// bytes -> &str
/// never guesses an encoding, never partially decodes
pub(crate) fn decode(side: DocSide, bytes: &[u8]) -> Result<&str, InputError> {
    std::str::from_utf8(bytes).map_err(|e| InputError::InvalidEncoding {
        side,
        valid_up_to: e.valid_up_to(),
    })
}
