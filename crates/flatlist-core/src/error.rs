use crate::ItemKey;

/// Violations of the key contract a list configuration must honor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Two items produced the same key.
    Duplicate {
        key: ItemKey,
        first_index: usize,
        second_index: usize,
    },
}

impl std::fmt::Display for KeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyError::Duplicate {
                key,
                first_index,
                second_index,
            } => write!(
                f,
                "duplicate item key {key} at indices {first_index} and {second_index}"
            ),
        }
    }
}

impl std::error::Error for KeyError {}
