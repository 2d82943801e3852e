/*!
 * Error types for the sciprep application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when loading paper records
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Error when reading a corpus file fails
    #[error("Failed to read corpus file: {0}")]
    Io(String),

    /// Error when parsing a corpus file fails
    #[error("Failed to parse corpus file: {0}")]
    Parse(String),

    /// Error when no paper records were found at the input path
    #[error("No paper records found at: {0}")]
    Empty(String),
}

/// Errors that can occur during text extraction
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Error when a paper record lacks a field the strategy requires
    #[error("Paper '{paper_id}' is missing required field '{field}'")]
    MissingField {
        /// Identifier of the offending paper
        paper_id: String,
        /// Name of the absent field
        field: &'static str,
    },
}

/// Errors that can occur in the annotation pipeline
#[derive(Error, Debug)]
pub enum AnnotationError {
    /// Error when the pipeline lexicon fails to load
    #[error("Failed to load annotation lexicon: {0}")]
    ModelLoad(String),

    /// Error when lexicon data is structurally invalid
    #[error("Invalid lexicon data: {0}")]
    InvalidLexicon(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from corpus loading
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Error from text extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from the annotation pipeline
    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
