use thiserror::Error;

#[derive(Error, Debug)]
pub enum HorizonError {
    /// Payload is not valid JSON, or has no `inputs` field.
    #[error("Parse error: {0}")]
    Parse(String),

    /// `inputs` holds non-numeric or malformed entries.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Raised by a `Forecaster` implementation.
    #[error("Model invocation error: {0}")]
    ModelInvocation(String),

    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
}

pub type Result<T> = std::result::Result<T, HorizonError>;
