//! Error handling for the runbit library
//!
//! This module provides the error type shared by all bitmap operations,
//! with detailed error information for validation failures.

use thiserror::Error;

/// Main error type for the runbit library
#[derive(Error, Debug)]
pub enum RunBitError {
    /// The bits covered by a run sequence exceed the universe bound
    #[error("domain overflow: run total {sum} exceeds universe {universe}")]
    DomainOverflow {
        /// Total number of bit positions covered by the offending prefix
        sum: u64,
        /// Universe bound the sequence was checked against
        universe: u64,
    },

    /// An ingested run length is not a non-negative integer
    #[error("invalid run: value {value} at index {index}")]
    InvalidRun {
        /// Index of the offending element within the run sequence
        index: usize,
        /// The rejected value
        value: i64,
    },

    /// Malformed input to a construction helper
    #[error("invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Configuration or parameter errors
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl RunBitError {
    /// Create a domain overflow error
    pub fn domain_overflow(sum: u64, universe: u64) -> Self {
        Self::DomainOverflow { sum, universe }
    }

    /// Create an invalid run error
    pub fn invalid_run(index: usize, value: i64) -> Self {
        Self::InvalidRun { index, value }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::DomainOverflow { .. } => "domain",
            Self::InvalidRun { .. } => "run",
            Self::InvalidData { .. } => "data",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RunBitError>;
