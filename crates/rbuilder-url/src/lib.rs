#![forbid(unsafe_code)]

//! Declarative URL composition.
//!
//! A block of [`UrlPart`]s is folded into [`UrlComponents`] and resolved with
//! the `url` crate. Path parts are appended with a `/` separator, query parts
//! append entries, and every other part overwrites the previous value.
//! Resolution never panics: components that do not form a URL yield `None`.

mod builder;
mod components;
mod part;

pub use builder::{UrlBlock, UrlBuilder, build_url};
pub use components::UrlComponents;
pub use part::{Scheme, UrlPart};
pub use url::Url;
