//! Categorical label encoder
//!
//! Fixed string -> integer mapping learned at training time. The
//! selectable set in the UI is restricted to exactly these classes, so
//! an unknown label here means programmatic misuse, not user error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown label: {0}")]
pub struct UnknownLabel(pub String);

/// Encoder state shipped inside the model bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// Known class labels, in fitted order. Code = position.
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Forward transform: label -> integer code
    pub fn transform(&self, label: &str) -> Result<usize, UnknownLabel> {
        self.classes
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| UnknownLabel(label.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        LabelEncoder {
            classes: vec!["ERC20".to_string(), "None".to_string(), "WETH".to_string()],
        }
    }

    #[test]
    fn test_transform_known_labels() {
        let enc = encoder();
        assert_eq!(enc.transform("ERC20").unwrap(), 0);
        assert_eq!(enc.transform("None").unwrap(), 1);
        assert_eq!(enc.transform("WETH").unwrap(), 2);
    }

    #[test]
    fn test_transform_unknown_label() {
        let enc = encoder();
        let err = enc.transform("DOGE").unwrap_err();
        assert_eq!(err.0, "DOGE");
    }
}
