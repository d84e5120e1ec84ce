use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    #[error("Precondition violated in {operation}: {reason}")]
    PreconditionViolation {
        operation: &'static str,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl LabError {
    pub fn precondition(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            operation,
            reason: reason.into(),
        }
    }

    /// True for the empty-input failures of `arithmetic_mean` and `CustomerLine::remove_first`
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::PreconditionViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, LabError>;
