use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for botline.
#[derive(Debug, Error)]
pub enum BotError {
    /// The Bot API answered with `ok: false`.
    #[error("telegram {method} failed: {description}")]
    Api {
        method: String,
        description: String,
        /// Numeric code supplied alongside the description, when present.
        error_code: Option<i64>,
    },

    /// A local file referenced for upload could not be read.
    #[error("bad file path: {}", path.display())]
    BadFilePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP exchange itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a valid envelope.
    #[error("telegram {method} returned an unreadable response: {message}")]
    Decode { method: String, message: String },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// A structured parameter could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BotError {
    /// Remote description for [`BotError::Api`], `None` for local failures.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Api { description, .. } => Some(description),
            _ => None,
        }
    }

    /// Whether this error originated on the remote side.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
