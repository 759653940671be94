//! Error types for catalog loading and neighbor queries.
//!
//! | Type | Raised by | Effect |
//! |------|-----------|--------|
//! | [`LoadError`] | [`crate::loader`], [`StarCatalog::load`](crate::StarCatalog::load) | Whole load rejected, catalog left invalid |
//! | [`QueryError`] | [`try_knn`](crate::query::try_knn), [`try_named_knn`](crate::query::try_named_knn) | Query answered with an empty result |
//!
//! Load errors are fatal to the load that produced them. Query errors never
//! escape [`knn`](crate::query::knn) or [`named_knn`](crate::query::named_knn):
//! those return an empty vector and log the reason.

use std::path::PathBuf;
use thiserror::Error;

/// Why a catalog source was rejected.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be opened or read to the end.
    #[error("cannot read star data from {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first line is missing or is not the expected header.
    #[error("invalid header {found:?}, expected {expected:?}")]
    InvalidHeader {
        found: String,
        expected: &'static str,
    },

    /// A data line does not have exactly five comma-separated fields.
    #[error("line {line}: expected 5 fields, found {fields}")]
    MalformedRow { line: usize, fields: usize },

    /// A numeric field could not be parsed.
    #[error("line {line}: cannot parse {field} from {value:?}")]
    MalformedField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl LoadError {
    /// 1-based line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRow { line, .. } | Self::MalformedField { line, .. } => Some(*line),
            Self::InvalidHeader { .. } => Some(1),
            Self::SourceUnavailable { .. } => None,
        }
    }
}

/// Why a neighbor query produced no result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("no valid star data loaded")]
    InvalidCatalog,

    #[error("k must be at least 1")]
    ZeroK,

    #[error("k = {k} exceeds the {available} stars in the catalog")]
    KTooLarge { k: usize, available: usize },

    #[error("star name must not be empty")]
    EmptyName,

    #[error("no star named {0:?}")]
    NameNotFound(String),
}
