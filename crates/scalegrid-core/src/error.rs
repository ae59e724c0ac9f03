//! Error types for trigger metadata validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Result type alias for metadata parsing.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// The first violation found while validating trigger metadata.
///
/// `key` is the metadata key as written in the trigger definition. For
/// missing fields, `label` is the human-readable name used in the message
/// (e.g. key `clusterIPAddress`, label `cluster IP address`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("no {label} given")]
    MissingField {
        key: &'static str,
        label: &'static str,
    },

    #[error("invalid {key} {value:?}: {source}")]
    InvalidInteger {
        key: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("invalid {key} {value:?}: {reason}")]
    InvalidEnumeration {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl MetadataError {
    /// The metadata key this error refers to.
    pub fn key(&self) -> &'static str {
        match self {
            MetadataError::MissingField { key, .. }
            | MetadataError::InvalidInteger { key, .. }
            | MetadataError::InvalidEnumeration { key, .. } => *key,
        }
    }
}
