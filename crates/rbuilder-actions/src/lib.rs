#![forbid(unsafe_code)]

//! Declarative action lists for alerts and action sheets.
//!
//! Actions are written into an [`ActionBlock`]; every reduction rule
//! flattens, so conditionals and loops contribute their actions in order.
//! The resulting [`ActionSheet`] is plain data for a presentation surface.

mod action;
mod list;
mod sheet;

pub use action::{Action, Disposition};
pub use list::{ActionBlock, ActionList, ActionListBuilder};
pub use sheet::{ActionSheet, PresentationStyle};
