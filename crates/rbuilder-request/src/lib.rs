#![forbid(unsafe_code)]

//! Declarative HTTP requests.
//!
//! # Role in rbuilder
//! A block of [`Parameter`]s (method, URL, headers, body, cache policy,
//! timeouts) is reduced by [`RequestBuilder`] into one root parameter. When a
//! [`Request`] runs, the root is applied to a [`RequestDescriptor`] and to a
//! [`SessionConfig`] and the pair is handed to a [`Transport`]. The default
//! transport is a blocking `reqwest` client.
//!
//! # Outcomes
//! Every failure is exactly one [`RequestError`]: transport, HTTP status
//! outside 200-299, or decode. There are no retries.
//!
//! ```no_run
//! use rbuilder_request::{Auth, Header, Headers, MediaType, Method, Parameter, Request};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Repo {
//!     name: String,
//! }
//!
//! let repo: Repo = Request::new(|b| {
//!     b.push(Parameter::url("https://api.example.com/repos/1"));
//!     b.push(Method::Get);
//!     b.push(Headers::build(|h| {
//!         h.push(Header::accept(MediaType::Json));
//!         h.push(Header::authorization(&Auth::bearer("token")));
//!     }));
//! })
//! .object()?;
//! println!("{}", repo.name);
//! # Ok::<(), rbuilder_request::RequestError>(())
//! ```

mod builder;
mod decoder;
mod descriptor;
mod error;
mod fan_out;
mod header;
mod method;
mod parameter;
mod request;
mod transport;

pub use builder::{RequestBlock, RequestBuilder};
pub use decoder::{Decoder, JsonDecoder, TextDecoder};
pub use descriptor::{CachePolicy, HeaderList, RequestDescriptor, SessionConfig};
pub use error::{BodyError, DecodeError, RequestError, Result, TransportError};
pub use fan_out::{execute_all, execute_all_successful};
pub use header::{Auth, CacheType, Header, Headers, MediaType};
pub use method::Method;
pub use parameter::{Body, Parameter};
pub use request::{DataRequest, Request};
pub use transport::{RawResponse, ReqwestTransport, ResponseMeta, Transport};
