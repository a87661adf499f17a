use duck_core::DuckError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VariantError {
    #[error("unknown duck variant {0:?}")]
    UnknownVariant(String),

    #[error("duck variant {0:?} is already registered")]
    DuplicateVariant(String),

    #[error(transparent)]
    Behavior(#[from] DuckError),

    #[error("roster JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VariantResult<T> = Result<T, VariantError>;
