use thiserror::Error;

/// Ошибки списка; `Display` содержит текст для пользователя
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("{0}")]
    Transport(String),

    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected server response: {0}")]
    Decode(String),

    /// The server answered `success: false`
    #[error("{0}")]
    Rejected(String),

    #[error("{0} is not available for this list")]
    Unsupported(&'static str),
}
