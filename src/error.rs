//! Error types.

/// Errors from route construction.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// No points were given, so there is no origin.
    #[error("point set is empty: a route needs at least an origin")]
    EmptyInput,

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Input index of the offending point.
        index: usize,
    },
}

/// Errors from reading a point file.
#[derive(Debug, thiserror::Error)]
pub enum PointsError {
    /// The underlying reader or file failed.
    #[error("failed to read points: {0}")]
    Io(#[from] std::io::Error),

    /// A row does not hold exactly two fields.
    #[error("line {line}: expected 2 coordinates, got {fields} in {content:?}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        fields: usize,
        /// The raw line.
        content: String,
    },

    /// A field is not a finite number.
    #[error("line {line}: invalid coordinate {token:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
}

/// Errors from loading or validating a [`RouteConfig`](crate::config::RouteConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
