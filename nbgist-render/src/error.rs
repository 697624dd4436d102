//! Error types for rendering operations

use std::fmt;

/// Errors that can occur while rendering a document
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Strategy not found in registry
    StrategyNotFound(String),
    /// Error parsing document source
    ParseError(String),
    /// Error decoding a front-matter block
    FrontMatterError(String),
    /// Error producing output HTML
    RenderFailed(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::StrategyNotFound(name) => write!(f, "Strategy '{name}' not found"),
            RenderError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            RenderError::FrontMatterError(msg) => write!(f, "Front matter error: {msg}"),
            RenderError::RenderFailed(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
