#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid data: {field} {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Invalid data: {0}")]
    MalformedBody(String),
    #[error("Duration must be positive")]
    NonPositiveDuration,
    #[error("Unknown workout category: {0}")]
    UnknownCategory(String),
}
