use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Caller-supplied search input that cannot be turned into [`crate::SearchCriteria`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required query parameter was absent or blank.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid location \"{value}\": {reason}")]
    InvalidLocation { value: String, reason: String },

    #[error("invalid price level \"{0}\": expected an integer from 0 to 4")]
    InvalidPriceLevel(String),

    #[error("invalid radius \"{0}\": expected a positive integer number of meters")]
    InvalidRadius(String),
}
