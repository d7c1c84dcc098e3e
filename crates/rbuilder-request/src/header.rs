//! Header vocabulary.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::builder::RequestBlock;
use crate::parameter::Parameter;

/// A media type for `Accept` and `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    Json,
    Xml,
    Text,
    Html,
    Css,
    JavaScript,
    Custom(String),
}

impl MediaType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Text => "text/plain",
            Self::Html => "text/html",
            Self::Css => "text/css",
            Self::JavaScript => "text/javascript",
            Self::Custom(value) => value,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        Self::Custom(value.to_owned())
    }
}

/// Credentials for the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    Basic { username: String, password: String },
    Bearer(String),
    /// `<scheme> <token>` for any other scheme.
    Custom { scheme: String, token: String },
}

impl Auth {
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    #[must_use]
    pub fn custom(scheme: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Custom {
            scheme: scheme.into(),
            token: token.into(),
        }
    }

    /// The header value.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::Custom { scheme, token } => format!("{scheme} {token}"),
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Bearer(_) => f.write_str("Bearer(..)"),
            Self::Custom { scheme, .. } => f
                .debug_struct("Custom")
                .field("scheme", scheme)
                .finish_non_exhaustive(),
        }
    }
}

/// `Cache-Control` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheType {
    NoCache,
    NoStore,
    NoTransform,
    OnlyIfCached,
    MaxAge(u64),
}

impl fmt::Display for CacheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCache => f.write_str("no-cache"),
            Self::NoStore => f.write_str("no-store"),
            Self::NoTransform => f.write_str("no-transform"),
            Self::OnlyIfCached => f.write_str("only-if-cached"),
            Self::MaxAge(seconds) => write!(f, "max-age={seconds}"),
        }
    }
}

/// One request header. Setting a header replaces any earlier value under
/// the same (case-insensitive) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Media type the client accepts.
    #[must_use]
    pub fn accept(media_type: MediaType) -> Self {
        Self::new("Accept", media_type.as_str())
    }

    #[must_use]
    pub fn authorization(auth: &Auth) -> Self {
        Self::new("Authorization", auth.value())
    }

    #[must_use]
    pub fn cache_control(cache: CacheType) -> Self {
        Self::new("Cache-Control", cache.to_string())
    }

    /// Body length in bytes.
    #[must_use]
    pub fn content_length(octets: u64) -> Self {
        Self::new("Content-Length", octets.to_string())
    }

    #[must_use]
    pub fn content_type(media_type: MediaType) -> Self {
        Self::new("Content-Type", media_type.as_str())
    }

    #[must_use]
    pub fn user_agent(agent: impl Into<String>) -> Self {
        Self::new("User-Agent", agent)
    }

    /// Virtual host, with an optional port.
    #[must_use]
    pub fn host(host: &str, port: Option<u16>) -> Self {
        match port {
            Some(port) => Self::new("Host", format!("{host}:{port}")),
            None => Self::new("Host", host),
        }
    }

    #[must_use]
    pub fn custom(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value)
    }
}

impl From<Header> for Parameter {
    fn from(header: Header) -> Self {
        Self::Header(header)
    }
}

/// Constructors for header groups.
#[derive(Debug, Clone, Copy)]
pub struct Headers;

impl Headers {
    /// A nested block of headers, reduced with the request rules.
    pub fn build(body: impl FnOnce(&mut RequestBlock)) -> Parameter {
        RequestBlock::build(body)
    }

    /// Headers from a name/value mapping, in iteration order.
    pub fn custom<I, K, V>(headers: I) -> Parameter
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Parameter::Combined(
            headers
                .into_iter()
                .map(|(name, value)| Parameter::Header(Header::new(name, value)))
                .collect(),
        )
    }
}
