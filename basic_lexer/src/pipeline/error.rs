use crate::config::runtime::ConfigError;
use crate::lexical::LexerError;
use crate::logging::{codes, Code};

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("{0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            PipelineError::LexicalAnalysis(error) => error.error_code(),
            PipelineError::FileRead { .. } => codes::system::FILE_READ_FAILURE,
            PipelineError::Config(_) => codes::system::CONFIGURATION_INVALID,
            PipelineError::Serialization(_) => codes::system::INTERNAL_ERROR,
        }
    }

    /// Underlying lexical error, if this failure came from the lexer
    pub fn as_lexer_error(&self) -> Option<&LexerError> {
        match self {
            PipelineError::LexicalAnalysis(error) => Some(error),
            _ => None,
        }
    }
}
