#![forbid(unsafe_code)]

//! Block-reduction protocol for the rbuilder combinator families.
//!
//! # Role in rbuilder
//! Every family (styled text, URLs, requests, action lists) is a closed set of
//! component values plus one [`BlockBuilder`] that knows how to reduce a block
//! of components into a single component. This crate holds that protocol and
//! the [`Block`] collector callers write into.
//!
//! # Reduction rules
//! - [`BlockBuilder::build_block`] folds a sequence of sibling components in
//!   source order.
//! - [`BlockBuilder::build_optional`] maps an absent component to the family's
//!   identity element.
//! - [`BlockBuilder::build_either`] yields whichever branch was taken.
//! - [`BlockBuilder::build_array`] folds loop iterations in iteration order;
//!   zero iterations fold to the identity element.
//!
//! # Example
//!
//! ```
//! use rbuilder_core::{Block, BlockBuilder, Branch};
//!
//! struct Words;
//!
//! impl BlockBuilder for Words {
//!     type Component = String;
//!
//!     fn build_block(components: Vec<String>) -> String {
//!         components.join(" ")
//!     }
//!
//!     fn build_optional(component: Option<String>) -> String {
//!         component.unwrap_or_default()
//!     }
//! }
//!
//! let shout = true;
//! let sentence = Block::<Words>::build(|b| {
//!     b.push("hello");
//!     b.push_either(Branch::when(shout, || "WORLD", || "world"));
//! });
//! assert_eq!(sentence, "hello WORLD");
//! ```

mod block;
mod branch;

pub use block::Block;
pub use branch::Branch;

/// Reduction rules for one combinator family.
///
/// Implementors are zero-sized markers; all operations are associated
/// functions so a family's rules can be named as a type parameter of
/// [`Block`].
pub trait BlockBuilder {
    /// The family's component type.
    type Component;

    /// Fold the components of one block, in source order.
    fn build_block(components: Vec<Self::Component>) -> Self::Component;

    /// Fold an `if` without `else`: `None` must produce the identity element.
    fn build_optional(component: Option<Self::Component>) -> Self::Component;

    /// Fold an `if/else` or `match`: the taken branch passes through.
    fn build_either(branch: Branch<Self::Component, Self::Component>) -> Self::Component {
        branch.into_inner()
    }

    /// Fold the results of a loop, in iteration order.
    fn build_array(components: Vec<Self::Component>) -> Self::Component {
        Self::build_block(components)
    }
}
