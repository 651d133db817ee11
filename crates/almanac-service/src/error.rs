use thiserror::Error;

/// Errors raised while rendering result rows into calendar items.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    ExpandError(#[from] almanac_expand::error::ExpandError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<almanac_expand::expand::ConversionError> for ServiceError {
    fn from(err: almanac_expand::expand::ConversionError) -> Self {
        Self::ExpandError(err.into())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
