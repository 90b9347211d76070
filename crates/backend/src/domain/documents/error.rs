use thiserror::Error;

/// Domain failures of the document store; handlers map them to HTTP statuses
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("{collection} {id} not found")]
    NotFound { collection: String, id: String },

    #[error("{0} cannot be converted")]
    ConversionUnsupported(String),

    #[error("{0} is already converted")]
    AlreadyConverted(String),

    #[error("Stored record is malformed: {0}")]
    Malformed(String),
}

impl DocumentError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        DocumentError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    /// Rejections that are reported as `success: false` instead of an HTTP error
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DocumentError::ConversionUnsupported(_) | DocumentError::AlreadyConverted(_)
        )
    }
}
