use thiserror::Error;

/// Errors raised when parsing model-level labels and codes.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown cardinal label: {0}")]
    UnknownCardinalLabel(String),
    #[error("unknown point category: {0}")]
    UnknownPointCategory(String),
    #[error("unknown channel type: {0}")]
    UnknownChannelType(String),
    #[error("unknown channel type code: {0}")]
    UnknownTypeCode(i32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
