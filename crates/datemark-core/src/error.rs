//! Error types for the Datemark watermarking pipeline.
//!
//! Per-file failures carry the file path so batch logs stay actionable.
//! Metadata absence is deliberately NOT an error — `DateExtractor` returns
//! `Option` and the watermark falls back to the configured sentinel text.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Datemark operations.
#[derive(Error, Debug)]
pub enum DatemarkError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Image encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Writing the encoded output file failed
    #[error("Write error for {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Output directory could not be created
    #[error("Failed to create output directory {path}: {message}")]
    OutputDir { path: PathBuf, message: String },

    /// Unsupported image format
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// No font in the resolution chain could be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// The top-level input path does not exist — aborts the whole run
    #[error("Input path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Convenience type alias for Datemark results.
pub type Result<T> = std::result::Result<T, DatemarkError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
