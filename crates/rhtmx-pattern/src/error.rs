//! Error types for pattern parsing, reversal and route tables

use std::path::PathBuf;

use thiserror::Error;

/// Structural violation in the pattern text itself
///
/// Raised only by the parser. A pattern that fails here should be rejected
/// when the route table is loaded, never at request time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// `{$}` found before the last segment
    #[error("invalid pattern \"{pattern}\": {{$}} must be the last segment")]
    EndAnchorNotLast { pattern: String },

    /// `{name...}` found before the last segment
    #[error("invalid pattern \"{pattern}\": {{{name}...}} must be the last segment")]
    RestNotLast { pattern: String, name: String },
}

/// Which way a build call disagreed with the pattern
///
/// `NotEnough` and `TooMany` are arity mismatches of a positional build;
/// `MissingValue` is a failed lookup in a name-keyed build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// Fewer values than required wildcards
    NotEnough,
    /// More values than the pattern can place
    TooMany,
    /// Name-keyed build without a value for some wildcard
    MissingValue,
}

/// Mismatch between a pattern's wildcard slots and the supplied values
///
/// Never corrupts the pattern; the same [`crate::Pattern`] can be built again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("not enough values for pattern \"{pattern}\", expect at least: {expected}")]
    NotEnough { pattern: String, expected: usize },

    #[error("too many values for pattern \"{pattern}\", got: {got}, used: {used}")]
    TooMany {
        pattern: String,
        got: usize,
        used: usize,
    },

    #[error("missing value for wildcard \"{name}\" in pattern \"{pattern}\"")]
    MissingValue { pattern: String, name: String },
}

impl BuildError {
    /// Returns the discriminant without the payload
    pub fn kind(&self) -> BuildErrorKind {
        match self {
            BuildError::NotEnough { .. } => BuildErrorKind::NotEnough,
            BuildError::TooMany { .. } => BuildErrorKind::TooMany,
            BuildError::MissingValue { .. } => BuildErrorKind::MissingValue,
        }
    }

    /// True for the positional count mismatches (`NotEnough`, `TooMany`)
    pub fn is_arity(&self) -> bool {
        matches!(self.kind(), BuildErrorKind::NotEnough | BuildErrorKind::TooMany)
    }
}

/// Errors from loading or querying a [`crate::RouteTable`]
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read route table {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse route table: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("route \"{name}\" has an invalid pattern")]
    InvalidRoute {
        name: String,
        #[source]
        source: PatternError,
    },

    #[error("no route named \"{0}\"")]
    UnknownRoute(String),

    #[error(transparent)]
    Build(#[from] BuildError),
}
