//! Error types for Mamushi
//!
//! The lowering core itself is total and never returns an error; these
//! types cover the outer surface (loading trees, the CLI).

use thiserror::Error;

/// Main error type for Mamushi
#[derive(Debug, Error)]
pub enum MamushiError {
    #[error("Invalid expression tree: {message}")]
    InvalidTree { message: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MamushiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tree_display() {
        let err = MamushiError::InvalidTree {
            message: "missing kind field".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Invalid expression tree: missing kind field"
        );
    }

    #[test]
    fn test_json_error_display() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = MamushiError::from(json_err);
        assert!(format!("{err}").starts_with("JSON error:"));
    }
}
