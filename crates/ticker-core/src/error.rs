//! Error Types

use thiserror::Error;

/// Result type alias for ticker operations
pub type Result<T> = std::result::Result<T, TickerError>;

/// Broad failure categories, one per stage of a price fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required configuration key is unset
    Configuration,
    /// An identifier does not name a registered implementation
    Resolution,
    /// The network request itself failed
    Transport,
    /// The response body is not the expected JSON
    Parse,
}

/// Ticker error types
#[derive(Error, Debug)]
pub enum TickerError {
    /// Required environment variable missing
    #[error("Configuration error: missing environment variable {key}")]
    Configuration { key: String },

    /// Identifier is not of the form `<namespace>.<TypeName>`
    #[error("Invalid implementation identifier: {0:?}")]
    InvalidIdentifier(String),

    /// No implementation is registered under the namespace
    #[error("Cannot resolve {identifier}: no namespace named {namespace}")]
    UnknownNamespace { identifier: String, namespace: String },

    /// Namespace exists but does not contain the type
    #[error("Cannot resolve {identifier}: {type_name} not found")]
    UnknownType { identifier: String, type_name: String },

    /// Network-level failure during a GET
    #[error("Transport error requesting {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Response carried no body at all
    #[error("Parse error: response has no body")]
    EmptyBody,

    /// Body is not valid JSON, or does not match the expected shape
    #[error("Parse error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Expected JSON path is absent
    #[error("Parse error: missing field {0}")]
    MissingField(String),

    /// Value at the path cannot be read as a number
    #[error("Parse error: {path} is not numeric: {value}")]
    NotNumeric { path: String, value: String },
}

impl TickerError {
    /// Taxonomy bucket of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::InvalidIdentifier(_)
            | Self::UnknownNamespace { .. }
            | Self::UnknownType { .. } => ErrorKind::Resolution,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::EmptyBody
            | Self::InvalidJson(_)
            | Self::MissingField(_)
            | Self::NotNumeric { .. } => ErrorKind::Parse,
        }
    }

    pub fn transport(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}
