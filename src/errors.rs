// ABOUTME: Error types for the tana-deck application
// ABOUTME: Provides structured error handling for rendering and packaging the deck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to write file: {0}")]
    FileWriteError(#[from] std::io::Error),

    #[error("XML serialization error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Deck has no slide records")]
    EmptyDeck,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
