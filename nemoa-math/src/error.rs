//! Error types for nemoa-math

use thiserror::Error;

use crate::core::registry::Category;

/// Result type for nemoa-math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// nemoa-math error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Operand shapes can not be combined elementwise
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// Axis specification has the wrong arity, is out of range or repeats an axis
    #[error("Invalid axes: {0}")]
    InvalidAxes(String),

    /// A numeric parameter violates its documented constraint
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown name '{name}' in category '{category}'")]
    UnknownName { category: Category, name: String },

    /// Registration collision
    #[error("Name '{name}' is already registered in category '{category}'")]
    DuplicateName { category: Category, name: String },

    /// Input can not be interpreted as a numeric array
    #[error("Not array-like: {0}")]
    NotArrayLike(String),

    #[error("Function '{name}' does not support keyword '{keyword}'")]
    UnsupportedKeyword { name: String, keyword: String },

    /// A checked function violates a mathematical axiom
    #[error("Axiom '{axiom}' violated: {detail}")]
    AxiomViolation { axiom: String, detail: String },
}

impl MathError {
    pub(crate) fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        MathError::ShapeMismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }

    pub(crate) fn axiom(axiom: &str, detail: impl Into<String>) -> Self {
        MathError::AxiomViolation {
            axiom: axiom.to_string(),
            detail: detail.into(),
        }
    }
}

impl From<serde_json::Error> for MathError {
    fn from(err: serde_json::Error) -> Self {
        MathError::NotArrayLike(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::UnknownName {
            category: Category::VectorNorm,
            name: "doesnotexist".into(),
        };
        assert!(err.to_string().contains("doesnotexist"));
        assert!(err.to_string().contains("vector.norm"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = MathError::shape_mismatch(&[2, 3], &[3, 2]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [2, 3], got [3, 2]");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1, ").unwrap_err();
        let err: MathError = json_err.into();
        assert!(matches!(err, MathError::NotArrayLike(_)));
    }
}
