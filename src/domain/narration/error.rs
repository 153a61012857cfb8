use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum MarkupServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("content too large: {0}")]
    PayloadTooLarge(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<MarkupServiceError> for AppError {
    fn from(err: MarkupServiceError) -> Self {
        match err {
            MarkupServiceError::Invalid(msg) => AppError::BadRequest(msg),
            MarkupServiceError::PayloadTooLarge(msg) => AppError::PayloadTooLarge(msg),
            MarkupServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
