//! Error types for the helios-io crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the helios-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from JSON serialization.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a date string does not parse.
    #[error("invalid date '{text}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The text that failed to parse.
        text: String,
    },

    /// Wraps a series or calendar reconstruction failure.
    #[error("series reconstruction failed: {reason}")]
    Series {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps a signature reconstruction failure.
    #[error("signature reconstruction failed: {reason}")]
    Signature {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.parquet"),
        };
        assert!(err.to_string().contains("/tmp/missing.parquet"));
    }

    #[test]
    fn display_invalid_date() {
        let err = IoError::InvalidDate {
            text: "2004-13-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date '2004-13-01': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn from_parquet_error() {
        let inner = parquet::errors::ParquetError::General("boom".to_string());
        let err: IoError = inner.into();
        assert!(matches!(err, IoError::Parquet { .. }));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
