use tracing::trace;
use url::Url;

use crate::descriptor::{HeaderList, RequestDescriptor, SessionConfig};
use crate::error::TransportError;

/// Status, headers and final URL of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: HeaderList,
    /// The URL after redirects, when the transport reports it.
    pub url: Option<Url>,
}

impl ResponseMeta {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A response as the transport received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub meta: ResponseMeta,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            meta: ResponseMeta {
                status,
                headers: HeaderList::new(),
                url: None,
            },
            body: body.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.meta.status
    }
}

/// Performs one request/response exchange.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: &RequestDescriptor,
        session: &SessionConfig,
    ) -> Result<RawResponse, TransportError>;
}

/// Blocking transport backed by `reqwest`.
///
/// The connect timeout is a client-level setting, so it only takes effect
/// when the client is built with [`ReqwestTransport::from_config`]. Responses
/// are never cached; the descriptor's cache policy is ignored.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::from_config(&SessionConfig::default())
    }

    /// A client built for `session`.
    pub fn from_config(session: &SessionConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = session.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = session.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    #[must_use]
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: &RequestDescriptor,
        session: &SessionConfig,
    ) -> Result<RawResponse, TransportError> {
        let url = request.url.clone().ok_or(TransportError::MissingUrl)?;
        let mut builder = self.client.request(request.method.into(), url);

        let mut headers = request.headers.clone();
        for (name, value) in session.default_headers.iter() {
            headers.set_if_absent(name, value);
        }
        if let Some(agent) = &session.user_agent {
            headers.set_if_absent("User-Agent", agent);
        }
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        if let Some(timeout) = request.timeout.or(session.timeout) {
            builder = builder.timeout(timeout);
        }
        trace!(
            method = %request.method,
            headers = headers.len(),
            cache_policy = ?request.cache_policy,
            "sending via reqwest"
        );

        let response = builder.send()?;
        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let response_headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes()?.to_vec();

        Ok(RawResponse {
            meta: ResponseMeta {
                status,
                headers: response_headers,
                url: Some(final_url),
            },
            body,
        })
    }
}
