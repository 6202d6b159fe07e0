//! Error types for the modalizer library.
//!
//! - [`ModalizerError`]: top-level error for a whole run
//! - [`AnnotationError`]: the annotation provider failed or returned bad data
//! - [`ConfigError`]: the TOML configuration could not be loaded
//!
//! Every failure is fatal for the run; nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for a transcript analysis run.
#[derive(Debug, Error)]
pub enum ModalizerError {
    /// The transcript could not be read (missing, unreadable or not UTF-8).
    #[error("failed to read transcript {path}: {source}")]
    ReadTranscript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The annotation provider failed.
    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    /// A report could not be serialized or written.
    #[error("failed to write report {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report could not be serialized.
    #[error("failed to serialize report: {0}")]
    SerializeReport(#[from] serde_json::Error),
}

/// Failure of the annotation provider or of an annotation document.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// No annotation exists for the requested text.
    #[error("no annotation available for line: {text:?}")]
    Missing { text: String },

    /// The annotation file could not be read.
    #[error("failed to read annotations {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSONL record is not a valid annotation document.
    #[error("malformed annotation on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A document is structurally inconsistent (offsets, heads, sentences).
    #[error("invalid annotation for {text:?}: {reason}")]
    Invalid { text: String, reason: String },

    /// Same as [`AnnotationError::Invalid`], located in a JSONL file.
    #[error("invalid annotation on line {line}: {reason}")]
    InvalidAt { line: usize, reason: String },
}

impl AnnotationError {
    pub(crate) fn invalid(text: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach a JSONL line number to a document-level error.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::Invalid { reason, .. } => Self::InvalidAt { line, reason },
            other => other,
        }
    }
}

/// Failure to load the TOML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
