use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::builder::RequestBlock;
use crate::decoder::{Decoder, JsonDecoder};
use crate::descriptor::{RequestDescriptor, SessionConfig};
use crate::error::{RequestError, Result, TransportError};
use crate::parameter::Parameter;
use crate::transport::{RawResponse, ReqwestTransport, ResponseMeta, Transport};

type RawHandler = Box<dyn FnOnce(&std::result::Result<RawResponse, TransportError>) + Send>;
type DataHandler = Box<dyn FnOnce(&[u8]) + Send>;
type ObjectHandler<T> = Box<dyn FnOnce(T) + Send>;
type ErrorHandler = Box<dyn FnOnce(RequestError) + Send>;

/// A request whose parameters were written as a block, decoded into `T`.
///
/// The parameters are folded when the request executes: the session hooks
/// run over the base [`SessionConfig`] and the request hooks over a fresh
/// [`RequestDescriptor`]. Without an explicit transport, a
/// [`ReqwestTransport`] is built from the folded session configuration.
pub struct Request<T> {
    root: Parameter,
    session: SessionConfig,
    transport: Option<Arc<dyn Transport>>,
    decoder: Arc<dyn Decoder<T>>,
    on_raw_response: Option<RawHandler>,
    on_data: Option<DataHandler>,
    on_object: Option<ObjectHandler<T>>,
    on_error: Option<ErrorHandler>,
}

/// A request read as bytes or untyped JSON.
pub type DataRequest = Request<serde_json::Value>;

impl<T: DeserializeOwned + 'static> Request<T> {
    /// A request from a block of parameters, decoding JSON responses.
    pub fn new(body: impl FnOnce(&mut RequestBlock)) -> Self {
        Self::from_parameter(RequestBlock::build(body))
    }

    #[must_use]
    pub fn from_parameter(root: Parameter) -> Self {
        Self {
            root,
            session: SessionConfig::default(),
            transport: None,
            decoder: Arc::new(JsonDecoder),
            on_raw_response: None,
            on_data: None,
            on_object: None,
            on_error: None,
        }
    }
}

impl<T> Request<T> {
    /// Send through `transport` instead of a fresh reqwest client.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Base session configuration, overridden by session parameters.
    #[must_use]
    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }

    /// Decode responses with `decoder`.
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl Decoder<T> + 'static) -> Self {
        self.decoder = Arc::new(decoder);
        self
    }

    /// The folded per-request descriptor.
    #[must_use]
    pub fn descriptor(&self) -> RequestDescriptor {
        let mut descriptor = RequestDescriptor::default();
        self.root.apply_to_request(&mut descriptor);
        trace!(
            method = %descriptor.method,
            url = descriptor.url.as_ref().map(url::Url::as_str),
            headers = descriptor.headers.len(),
            body_len = descriptor.body.as_ref().map(Vec::len),
            "request descriptor folded"
        );
        descriptor
    }

    /// The base session configuration with session parameters applied.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        let mut session = self.session.clone();
        self.root.apply_to_session(&mut session);
        session
    }

    #[must_use]
    pub fn parameter(&self) -> &Parameter {
        &self.root
    }

    /// Run the exchange and check the status.
    pub fn response(&self) -> Result<RawResponse> {
        classify(self.send()?)
    }

    /// The response body.
    pub fn data(&self) -> Result<Vec<u8>> {
        Ok(self.response()?.body)
    }

    /// The decoded response body.
    pub fn object(&self) -> Result<T> {
        Ok(self.object_with_response()?.0)
    }

    /// The body decoded with `decoder` instead of the request's decoder.
    pub fn object_with<U>(&self, decoder: &dyn Decoder<U>) -> Result<U> {
        let response = self.response()?;
        Ok(decoder.decode(&response.body)?)
    }

    /// The decoded body together with the response metadata.
    pub fn object_with_response(&self) -> Result<(T, ResponseMeta)> {
        let response = self.response()?;
        let object = self.decoder.decode(&response.body)?;
        Ok((object, response.meta))
    }

    fn send(&self) -> std::result::Result<RawResponse, TransportError> {
        let descriptor = self.descriptor();
        let session = self.session_config();
        let method = descriptor.method;
        let url = descriptor
            .url
            .as_ref()
            .map_or_else(String::new, ToString::to_string);
        debug!(%method, %url, "request started");

        let started = Instant::now();
        let outcome = match &self.transport {
            Some(transport) => transport.execute(&descriptor, &session),
            None => ReqwestTransport::from_config(&session)
                .and_then(|transport| transport.execute(&descriptor, &session)),
        };
        let elapsed_ms = whole_millis(started.elapsed());

        match &outcome {
            Ok(response) => debug!(
                %method,
                %url,
                status = response.status(),
                elapsed_ms,
                "request finished"
            ),
            Err(err) => debug!(%method, %url, error = %err, elapsed_ms, "request failed"),
        }
        outcome
    }
}

impl<T: Send + 'static> Request<T> {
    /// Called with the transport outcome before any classification.
    #[must_use]
    pub fn on_raw_response(
        mut self,
        handler: impl FnOnce(&std::result::Result<RawResponse, TransportError>) + Send + 'static,
    ) -> Self {
        self.on_raw_response = Some(Box::new(handler));
        self
    }

    /// Called with the body of a successful response.
    #[must_use]
    pub fn on_data(mut self, handler: impl FnOnce(&[u8]) + Send + 'static) -> Self {
        self.on_data = Some(Box::new(handler));
        self
    }

    /// Called with the decoded body of a successful response.
    #[must_use]
    pub fn on_object(mut self, handler: impl FnOnce(T) + Send + 'static) -> Self {
        self.on_object = Some(Box::new(handler));
        self
    }

    /// [`Request::on_object`] with a specific decoder.
    #[must_use]
    pub fn on_object_with(
        self,
        decoder: impl Decoder<T> + 'static,
        handler: impl FnOnce(T) + Send + 'static,
    ) -> Self {
        self.with_decoder(decoder).on_object(handler)
    }

    /// Called with the failure, if any. Without it failures are only logged.
    #[must_use]
    pub fn on_error(mut self, handler: impl FnOnce(RequestError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// Run the exchange on a background thread and dispatch to the handlers.
    pub fn resume(self) -> JoinHandle<()> {
        thread::spawn(move || self.dispatch())
    }

    fn dispatch(mut self) {
        let outcome = self.send();
        if let Some(handler) = self.on_raw_response.take() {
            handler(&outcome);
        }

        let response = match outcome.map_err(RequestError::from).and_then(classify) {
            Ok(response) => response,
            Err(err) => return self.fail(err),
        };

        if let Some(handler) = self.on_data.take() {
            handler(&response.body);
        }
        if let Some(handler) = self.on_object.take() {
            match self.decoder.decode(&response.body) {
                Ok(object) => handler(object),
                Err(err) => self.fail(err.into()),
            }
        }
    }

    fn fail(&mut self, err: RequestError) {
        match self.on_error.take() {
            Some(handler) => handler(err),
            None => debug!(error = %err, "request error without handler"),
        }
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("root", &self.root)
            .field("session", &self.session)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

fn classify(response: RawResponse) -> Result<RawResponse> {
    if response.meta.is_success() {
        Ok(response)
    } else {
        Err(RequestError::Http {
            status: response.status(),
            body: (!response.body.is_empty()).then_some(response.body),
        })
    }
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
