use std::time::Duration;
use thiserror::Error;

/// Result type alias for updater operations
pub type Result<T> = std::result::Result<T, UpdaterError>;

/// Errors that can occur while resolving and upserting a record
#[derive(Error, Debug)]
pub enum UpdaterError {
    /// A required value was empty or not given
    #[error("missing required value: {0}")]
    MissingOption(&'static str),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// The metadata endpoint could not be reached
    #[error("failed to fetch public hostname from instance metadata: {0}")]
    Metadata(String),

    /// The metadata endpoint answered with a non-success status
    #[error("instance metadata returned HTTP {status} for {url}")]
    MetadataStatus {
        /// HTTP status code
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// The metadata endpoint answered with an empty body
    #[error("instance metadata returned an empty public hostname")]
    MetadataEmpty,

    /// Request timed out
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The change batch could not be assembled
    #[error("invalid change: {0}")]
    InvalidChange(String),

    /// The DNS provider rejected or failed the request
    #[error("{}", provider_message(.code.as_deref(), .message))]
    Provider {
        /// Provider error code, when the service returned one
        code: Option<String>,
        /// Error message from the provider
        message: String,
    },
}

fn provider_message(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("{code}: {message}"),
        None => message.to_string(),
    }
}

impl UpdaterError {
    /// Returns true if the error happened before any network activity
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingOption(_) | Self::Config(_))
    }

    /// Returns true if the error came from the instance metadata endpoint
    #[must_use]
    pub const fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            Self::Metadata(_) | Self::MetadataStatus { .. } | Self::MetadataEmpty
        )
    }

    /// Returns the provider error code, if any
    #[must_use]
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            Self::Provider { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
