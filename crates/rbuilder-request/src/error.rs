use std::error::Error as StdError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RequestError>;

/// Terminal outcome of a failed request. Exactly one variant applies.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The exchange did not produce a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status outside 200-299.
    #[error("HTTP status {status}")]
    Http { status: u16, body: Option<Vec<u8>> },

    /// The response body could not be decoded into the payload type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl RequestError {
    /// The HTTP status for [`RequestError::Http`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Failure below the HTTP layer.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request has no URL")]
    MissingUrl,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom [`Transport`](crate::Transport).
    #[error("{0}")]
    Other(Box<dyn StdError + Send + Sync>),
}

impl TransportError {
    pub fn other(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Other(error.into())
    }
}

/// A decoder failure, carrying the underlying error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct DecodeError(Box<dyn StdError + Send + Sync>);

impl DecodeError {
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self(error.into())
    }

    /// The underlying decoder error.
    #[must_use]
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error)
    }
}

/// A request body that could not be encoded.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
