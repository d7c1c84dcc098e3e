use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::descriptor::{CachePolicy, RequestDescriptor, SessionConfig};
use crate::error::BodyError;
use crate::header::Header;
use crate::method::Method;

/// One component of a request block.
///
/// Each parameter has two hooks: [`Parameter::apply_to_request`] writes the
/// per-request descriptor and [`Parameter::apply_to_session`] writes the
/// session configuration. Most variants only touch the descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Parameter {
    /// Contributes nothing.
    #[default]
    Empty,
    Method(Method),
    Url(Url),
    Header(Header),
    Body(Vec<u8>),
    CachePolicy(CachePolicy),
    /// Request timeout; written to both the descriptor and the session.
    Timeout(Duration),
    /// Connection timeout; session only.
    ConnectTimeout(Duration),
    /// Children applied depth-first, in order, to both hooks.
    Combined(Vec<Parameter>),
}

impl Parameter {
    pub fn apply_to_request(&self, request: &mut RequestDescriptor) {
        match self {
            Self::Method(method) => request.method = *method,
            Self::Url(url) => request.url = Some(url.clone()),
            Self::Header(header) => request.headers.set(&header.name, &header.value),
            Self::Body(bytes) => request.body = Some(bytes.clone()),
            Self::CachePolicy(policy) => request.cache_policy = *policy,
            Self::Timeout(timeout) => request.timeout = Some(*timeout),
            Self::Combined(children) => {
                for child in children {
                    child.apply_to_request(request);
                }
            }
            Self::Empty | Self::ConnectTimeout(_) => {}
        }
    }

    pub fn apply_to_session(&self, session: &mut SessionConfig) {
        match self {
            Self::Timeout(timeout) => session.timeout = Some(*timeout),
            Self::ConnectTimeout(timeout) => session.connect_timeout = Some(*timeout),
            Self::Combined(children) => {
                for child in children {
                    child.apply_to_session(session);
                }
            }
            _ => {}
        }
    }

    /// The URL to send to. A string that does not parse yields
    /// [`Parameter::Empty`], leaving the request without a URL.
    #[must_use]
    pub fn url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(url) => Self::Url(url),
            Err(err) => {
                tracing::debug!(url, error = %err, "ignoring unparsable request url");
                Self::Empty
            }
        }
    }

    #[must_use]
    pub fn timeout(timeout: Duration) -> Self {
        Self::Timeout(timeout)
    }

    #[must_use]
    pub fn connect_timeout(timeout: Duration) -> Self {
        Self::ConnectTimeout(timeout)
    }
}

impl From<Method> for Parameter {
    fn from(method: Method) -> Self {
        Self::Method(method)
    }
}

impl From<Url> for Parameter {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<CachePolicy> for Parameter {
    fn from(policy: CachePolicy) -> Self {
        Self::CachePolicy(policy)
    }
}

/// Constructors for request bodies.
#[derive(Debug, Clone, Copy)]
pub struct Body;

impl Body {
    /// `value` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Parameter, BodyError> {
        Ok(Parameter::Body(serde_json::to_vec(value)?))
    }

    #[must_use]
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Parameter {
        Parameter::Body(bytes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_touches_both_hooks() {
        let parameter = Parameter::timeout(Duration::from_secs(3));
        let mut request = RequestDescriptor::default();
        let mut session = SessionConfig::default();
        parameter.apply_to_request(&mut request);
        parameter.apply_to_session(&mut session);
        assert_eq!(request.timeout, Some(Duration::from_secs(3)));
        assert_eq!(session.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn connect_timeout_is_session_only() {
        let parameter = Parameter::connect_timeout(Duration::from_secs(1));
        let mut request = RequestDescriptor::default();
        let mut session = SessionConfig::default();
        parameter.apply_to_request(&mut request);
        parameter.apply_to_session(&mut session);
        assert_eq!(request, RequestDescriptor::default());
        assert_eq!(session.connect_timeout, Some(Duration::from_secs(1)));
    }

    #[test]
    fn combined_applies_depth_first_in_order() {
        let parameter = Parameter::Combined(vec![
            Method::Put.into(),
            Parameter::Combined(vec![Method::Delete.into(), Header::custom("X-A", "1").into()]),
            Header::custom("x-a", "2").into(),
        ]);
        let mut request = RequestDescriptor::default();
        parameter.apply_to_request(&mut request);
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.header("X-A"), Some("2"));
    }

    #[test]
    fn json_body_encodes_payload() {
        #[derive(Serialize)]
        struct Todo<'a> {
            title: &'a str,
            done: bool,
        }
        let parameter = Body::json(&Todo {
            title: "write",
            done: false,
        });
        assert!(matches!(
            parameter,
            Ok(Parameter::Body(ref bytes)) if bytes == br#"{"title":"write","done":false}"#
        ));
    }

    #[test]
    fn bad_url_string_is_empty() {
        assert_eq!(Parameter::url("not a url"), Parameter::Empty);
        assert!(matches!(Parameter::url("https://example.com/x"), Parameter::Url(_)));
    }
}
