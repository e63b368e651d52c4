use thiserror::Error;

/// Failures raised by the arithmetic helpers in [`crate::core::math`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("{message}")]
    InvalidArgument { message: String },
}

impl MathError {
    pub(crate) fn invalid_argument(message: &str) -> Self {
        MathError::InvalidArgument {
            message: message.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("Invalid date: '{value}'. Use 'YYYY-MM-DD' or an RFC 3339 timestamp")]
    InvalidDate { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl UtilsError {
    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            UtilsError::Math(_) | UtilsError::InvalidDate { .. } => 1,
            UtilsError::ConfigValidationError { .. }
            | UtilsError::InvalidConfigValueError { .. }
            | UtilsError::IoError(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_messages() {
        assert_eq!(MathError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            MathError::invalid_argument("Square root of negative number").to_string(),
            "Square root of negative number"
        );
    }

    #[test]
    fn test_math_error_is_transparent() {
        let err: UtilsError = MathError::DivisionByZero.into();
        assert_eq!(err.to_string(), "Division by zero");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = UtilsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
    }
}
