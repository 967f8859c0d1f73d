//! Error types for the two-dimensional map.
//!
//! Only insertion can fail. Every read path is total and reports a missing
//! coordinate as `None` instead of an error.

use crate::core::types::KeyPart;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Map2DError {
    /// `put` was called with an absent row key, column key, or both.
    #[error("invalid key: {missing} key is absent")]
    InvalidKey { missing: KeyPart },
}

pub type Map2DResult<T> = Result<T, Map2DError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_message_names_the_missing_part() {
        let err = Map2DError::InvalidKey { missing: KeyPart::Row };
        assert_eq!(err.to_string(), "invalid key: row key is absent");

        let err = Map2DError::InvalidKey { missing: KeyPart::Both };
        assert_eq!(err.to_string(), "invalid key: row and column key is absent");
    }
}
