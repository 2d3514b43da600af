//! Error types for command translation

use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("{0} not found in .env file.")]
    MissingCredential(String),

    #[error("Settings file error: {0}")]
    Settings(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("API error: {0}")]
    Api(#[from] OpenAIError),

    #[error("Model returned no choices")]
    EmptyCompletion,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
