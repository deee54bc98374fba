/*!
 * Error types for the pronouncecraft application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when loading the pronunciation table
#[derive(Error, Debug)]
pub enum TableError {
    /// Error when the table file cannot be read
    #[error("Failed to read table file: {0}")]
    ReadFailed(String),

    /// Error when the table file yields no usable entries
    #[error("Table file contains no entries: {0}")]
    Empty(String),
}

/// Errors that can occur during transcription
#[derive(Error, Debug)]
pub enum TranscriptionError {
    /// Error from the pronunciation table
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the pronunciation table
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Error from transcription
    #[error("Transcription error: {0}")]
    Transcription(#[from] TranscriptionError),

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
