/// Flat error taxonomy shared by every layer
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Transport failure: request not sent, non-2xx status, socket refused
    NetworkError(String),
    /// Payload arrived but could not be decoded
    ParseError(String),
    /// The chart surface rejected an instruction
    RenderingError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {msg}"),
            AppError::ParseError(msg) => write!(f, "Parse Error: {msg}"),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {msg}"),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

pub type NetworkResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
