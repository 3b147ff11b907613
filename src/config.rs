use serde::{Deserialize, Serialize};

use crate::error::{DocSide, InputError};

/// Options for one comparison call
///
/// # Examples
/// ```
/// use tf_idf_similarity::{compare_with, CompareConfig};
/// let config = CompareConfig { max_input_bytes: Some(1024), ..Default::default() };
/// let result = compare_with(&config, "rust is fast", "rust is safe").unwrap();
/// assert!(result.percentage > 0.0 && result.percentage < 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Reject documents longer than this many bytes
    /// `None` means unlimited
    pub max_input_bytes: Option<usize>,
    /// L2 normalize the TF-IDF vectors before taking the cosine
    /// The score is the same either way
    pub normalize: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            normalize: true,
        }
    }
}

impl CompareConfig {
    /// Check the size limit for one document
    pub fn check_len(&self, side: DocSide, len: usize) -> Result<(), InputError> {
        match self.max_input_bytes {
            Some(limit) if len > limit => Err(InputError::TooLarge { side, len, limit }),
            _ => Ok(()),
        }
    }
}
