use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input closed while waiting for {expected}")]
    InputClosed { expected: String },
}

impl GradeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GradeError::InputClosed { expected } => {
                format!("Input ended before the {} was provided.", expected)
            }
            GradeError::InvalidArgument { message } => {
                format!("Could not compute the mean: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
