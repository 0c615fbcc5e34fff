//! Error types for portfolio generation.
//!
//! This module provides [`PortfolioError`], the primary error type for all
//! generation operations. Token resolution itself never fails (missing
//! optional fields are silently defaulted); errors only arise from record
//! validation, data loading, and filesystem population.

use std::fmt;

/// Error type for portfolio generation operations.
#[derive(Debug)]
pub enum PortfolioError {
    /// Required top-level fields are absent from the resume record.
    ///
    /// Carries the wire names of every missing field in one report.
    MissingFields(Vec<String>),

    /// Resume data could not be parsed from JSON or YAML.
    Serialization(String),

    /// I/O error (e.g., reading or writing site files).
    Io(std::io::Error),
}

impl fmt::Display for PortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioError::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            PortfolioError::Serialization(msg) => write!(f, "serialization error: {}", msg),
            PortfolioError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for PortfolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortfolioError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PortfolioError {
    fn from(err: std::io::Error) -> Self {
        PortfolioError::Io(err)
    }
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for PortfolioError {
    fn from(err: serde_yaml::Error) -> Self {
        PortfolioError::Serialization(err.to_string())
    }
}
