#![forbid(unsafe_code)]

//! Declarative styled-text composition.
//!
//! # Role in rbuilder
//! `rbuilder-text` is the styled-text family: [`Fragment`]s are written into a
//! [`TextBlock`], folded by [`TextBuilder`] into one [`StyledText`], and
//! formatted with the [`Modify`] methods. Nothing here lays out or draws text;
//! the result is handed to whatever surface renders it.
//!
//! # Ranges
//! Sub-range modifiers use byte offsets into the composed string. Ranges past
//! the end are clamped and ranges inside a multi-byte character are widened
//! to the enclosing character boundaries.
//!
//! # Example
//!
//! ```
//! use rbuilder_text::{Color, Font, Fragment, LineStyle, Modify, StyledText, text};
//!
//! let items = ["milk", "eggs"];
//! let list = StyledText::build(|b| {
//!     b.push("Groceries".font(Font::bold_system(17.0)).underline(LineStyle::SINGLE, None));
//!     b.push(Fragment::line_break(1));
//!     b.push_each(items, |b, item| {
//!         b.push("- ").push(item).push(Fragment::line_break(1));
//!     });
//!     b.push(text(|b| {
//!         b.push("done");
//!     }).foreground_color(Color::GRAY));
//! });
//! assert_eq!(list.as_str(), "Groceries\n- milk\n- eggs\ndone");
//! ```

mod attribute;
mod builder;
mod color;
mod font;
mod fragment;
mod image;
mod modifier;
mod paragraph;
mod styled;

pub use attribute::{Attribute, AttributeKey, Attributes, Ligature, LineStyle, Shadow, TextEffect};
pub use builder::{TextBlock, TextBuilder, text};
pub use color::Color;
pub use font::{Font, FontFamily, FontWeight};
pub use fragment::Fragment;
pub use image::{Image, ImageAttachment, OBJECT_REPLACEMENT, Size};
pub use modifier::{Modify, Ranged};
pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment, WritingDirection};
pub use styled::{RunRef, StyledText};
