use rbuilder_core::{Block, BlockBuilder};
use url::Url;

use crate::components::UrlComponents;
use crate::part::UrlPart;

/// Reduction rules for URL blocks.
#[derive(Debug, Clone, Copy)]
pub struct UrlBuilder;

/// A block of URL parts.
pub type UrlBlock = Block<UrlBuilder>;

impl BlockBuilder for UrlBuilder {
    type Component = UrlPart;

    fn build_block(components: Vec<UrlPart>) -> UrlPart {
        UrlPart::Combined(components)
    }

    fn build_optional(component: Option<UrlPart>) -> UrlPart {
        component.unwrap_or_default()
    }
}

/// Fold a block of URL parts and resolve it.
///
/// ```
/// use rbuilder_url::{Scheme, UrlPart, build_url};
///
/// let url = build_url(|b| {
///     b.push(Scheme::Https)
///         .push(UrlPart::host("rakuten.co.jp"))
///         .push(UrlPart::path("item/shop"))
///         .push(UrlPart::query("q", 123));
/// });
/// assert_eq!(url.map(String::from).as_deref(), Some("https://rakuten.co.jp/item/shop?q=123"));
/// ```
#[must_use]
pub fn build_url(body: impl FnOnce(&mut UrlBlock)) -> Option<Url> {
    UrlComponents::from_part(&UrlBlock::build(body)).url()
}
