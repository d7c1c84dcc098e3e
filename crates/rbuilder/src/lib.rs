#![forbid(unsafe_code)]

//! rbuilder public facade crate.
//!
//! Re-exports the combinator families and offers a prelude with the names
//! most blocks need:
//!
//! - styled text: [`StyledText::build`], [`Fragment`], the [`Modify`] methods
//! - URLs: [`build_url`], [`UrlPart`]
//! - requests (feature `request`, on by default): [`Request`], [`Parameter`],
//!   [`execute_all`]
//! - action lists: [`ActionSheet`], [`Action`]

// --- Core re-exports -------------------------------------------------------

pub use rbuilder_core::{Block, BlockBuilder, Branch};

// --- Text re-exports -------------------------------------------------------

pub use rbuilder_text::{
    Attribute, AttributeKey, Attributes, Color, Font, FontWeight, Fragment, Image,
    ImageAttachment, LineStyle, Modify, ParagraphStyle, Shadow, Size, StyledText, TextAlignment,
    TextBlock,
};

// --- URL re-exports --------------------------------------------------------

pub use rbuilder_url::{Scheme, Url, UrlBlock, UrlComponents, UrlPart, build_url};

// --- Request re-exports ----------------------------------------------------

#[cfg(feature = "request")]
pub use rbuilder_request::{
    Auth, Body, CacheType, DataRequest, Header, Headers, MediaType, Method, Parameter, Request,
    RequestBlock, RequestError, SessionConfig, Transport, execute_all, execute_all_successful,
};

// --- Action re-exports -----------------------------------------------------

pub use rbuilder_actions::{Action, ActionList, ActionSheet, Disposition, PresentationStyle};

pub use rbuilder_actions as actions;
pub use rbuilder_core as core;
#[cfg(feature = "request")]
pub use rbuilder_request as request;
pub use rbuilder_text as text;
pub use rbuilder_url as url;

pub mod prelude {
    pub use crate::{
        Action, ActionSheet, Branch, Color, Font, Fragment, Modify, Scheme, StyledText, UrlPart,
        build_url,
    };

    #[cfg(feature = "request")]
    pub use crate::{
        Auth, Body, CacheType, Header, Headers, MediaType, Method, Parameter, Request,
        RequestError, execute_all, execute_all_successful,
    };

    pub use crate::{actions, core, text, url};

    #[cfg(feature = "request")]
    pub use crate::request;
}
