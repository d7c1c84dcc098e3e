//! The closed attribute vocabulary and the per-run attribute map.
//!
//! Every [`Attribute`] has exactly one [`AttributeKey`]. An [`Attributes`] map
//! holds at most one value per key: [`Attributes::insert`] is last-write-wins,
//! [`Attributes::insert_if_absent`] only fills missing keys.

use std::collections::BTreeMap;
use std::collections::btree_map;

use bitflags::bitflags;
use url::Url;

use crate::color::Color;
use crate::font::Font;
use crate::image::ImageAttachment;
use crate::paragraph::{ParagraphStyle, WritingDirection};

bitflags! {
    /// Line style for underlines and strikethroughs.
    ///
    /// A style combines a thickness (`SINGLE`, `THICK`, `DOUBLE`) with an
    /// optional dash pattern and the `BY_WORD` flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LineStyle: u16 {
        const SINGLE = 0x0001;
        const THICK = 0x0002;
        const DOUBLE = 0x0009;
        const PATTERN_DOT = 0x0100;
        const PATTERN_DASH = 0x0200;
        const PATTERN_DASH_DOT = 0x0300;
        const PATTERN_DASH_DOT_DOT = 0x0400;
        const BY_WORD = 0x8000;
    }
}

/// Ligature policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ligature {
    /// Only ligatures required for correct rendering.
    None,
    /// The font's default ligatures.
    #[default]
    Default,
    /// Every ligature the font provides.
    All,
}

/// Decorative text effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEffect {
    LetterPress,
}

/// A drop shadow behind the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// `None` leaves the color to the renderer (usually translucent black).
    pub color: Option<Color>,
    pub blur_radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    #[must_use]
    pub fn new(blur_radius: f64) -> Self {
        Self {
            blur_radius,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }
}

/// Identity of an attribute; an [`Attributes`] map holds one value per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKey {
    Font,
    ForegroundColor,
    BackgroundColor,
    BaselineOffset,
    Expansion,
    Kerning,
    Ligature,
    Obliqueness,
    StrikethroughStyle,
    StrikethroughColor,
    StrokeWidth,
    StrokeColor,
    UnderlineStyle,
    UnderlineColor,
    Shadow,
    TextEffect,
    WritingDirection,
    VerticalGlyphForm,
    Link,
    Attachment,
    ParagraphStyle,
}

/// One formatting attribute with its value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Font(Font),
    ForegroundColor(Color),
    BackgroundColor(Color),
    /// Points above (positive) or below the baseline.
    BaselineOffset(f64),
    /// Log of the horizontal stretch factor.
    Expansion(f64),
    /// Extra points between characters.
    Kerning(f64),
    Ligature(Ligature),
    /// Skew applied to glyphs.
    Obliqueness(f64),
    StrikethroughStyle(LineStyle),
    StrikethroughColor(Color),
    /// Percentage of font size; negative values stroke and fill.
    StrokeWidth(f64),
    StrokeColor(Color),
    UnderlineStyle(LineStyle),
    UnderlineColor(Color),
    Shadow(Shadow),
    TextEffect(TextEffect),
    WritingDirection(WritingDirection),
    VerticalGlyphForm(bool),
    Link(Url),
    Attachment(ImageAttachment),
    ParagraphStyle(ParagraphStyle),
}

impl Attribute {
    /// The key this value is stored under.
    #[must_use]
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::BaselineOffset(_) => AttributeKey::BaselineOffset,
            Self::Expansion(_) => AttributeKey::Expansion,
            Self::Kerning(_) => AttributeKey::Kerning,
            Self::Ligature(_) => AttributeKey::Ligature,
            Self::Obliqueness(_) => AttributeKey::Obliqueness,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::StrikethroughColor(_) => AttributeKey::StrikethroughColor,
            Self::StrokeWidth(_) => AttributeKey::StrokeWidth,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::Shadow(_) => AttributeKey::Shadow,
            Self::TextEffect(_) => AttributeKey::TextEffect,
            Self::WritingDirection(_) => AttributeKey::WritingDirection,
            Self::VerticalGlyphForm(_) => AttributeKey::VerticalGlyphForm,
            Self::Link(_) => AttributeKey::Link,
            Self::Attachment(_) => AttributeKey::Attachment,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
        }
    }
}

/// Attribute map for one run of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: BTreeMap<AttributeKey, Attribute>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `attribute`, replacing any value under the same key.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.entries.insert(attribute.key(), attribute)
    }

    /// Set `attribute` only if its key is unset. Returns whether it was set.
    pub fn insert_if_absent(&mut self, attribute: Attribute) -> bool {
        match self.entries.entry(attribute.key()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(attribute);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Overlay every entry of `other` (last-write-wins).
    pub fn merge(&mut self, other: &Attributes) {
        for attribute in other.iter() {
            self.insert(attribute.clone());
        }
    }

    /// Fill keys from `other` that are not yet set here.
    pub fn merge_if_absent(&mut self, other: &Attributes) {
        for attribute in other.iter() {
            self.insert_if_absent(attribute.clone());
        }
    }

    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.entries.get(&key)
    }

    #[must_use]
    pub fn contains_key(&self, key: AttributeKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn remove(&mut self, key: AttributeKey) -> Option<Attribute> {
        self.entries.remove(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.entries.keys().copied()
    }

    // Typed accessors for the attributes callers inspect most.

    #[must_use]
    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::Font) {
            Some(Attribute::Font(font)) => Some(font),
            _ => None,
        }
    }

    #[must_use]
    pub fn foreground_color(&self) -> Option<Color> {
        match self.get(AttributeKey::ForegroundColor) {
            Some(Attribute::ForegroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    #[must_use]
    pub fn background_color(&self) -> Option<Color> {
        match self.get(AttributeKey::BackgroundColor) {
            Some(Attribute::BackgroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    #[must_use]
    pub fn underline_style(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::UnderlineStyle) {
            Some(Attribute::UnderlineStyle(style)) => Some(*style),
            _ => None,
        }
    }

    #[must_use]
    pub fn strikethrough_style(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::StrikethroughStyle) {
            Some(Attribute::StrikethroughStyle(style)) => Some(*style),
            _ => None,
        }
    }

    #[must_use]
    pub fn shadow(&self) -> Option<&Shadow> {
        match self.get(AttributeKey::Shadow) {
            Some(Attribute::Shadow(shadow)) => Some(shadow),
            _ => None,
        }
    }

    #[must_use]
    pub fn link(&self) -> Option<&Url> {
        match self.get(AttributeKey::Link) {
            Some(Attribute::Link(url)) => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub fn attachment(&self) -> Option<&ImageAttachment> {
        match self.get(AttributeKey::Attachment) {
            Some(Attribute::Attachment(attachment)) => Some(attachment),
            _ => None,
        }
    }

    #[must_use]
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(AttributeKey::ParagraphStyle) {
            Some(Attribute::ParagraphStyle(style)) => Some(style),
            _ => None,
        }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut attributes = Self::new();
        attributes.extend(iter);
        attributes
    }
}

impl Extend<Attribute> for Attributes {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

impl From<Attribute> for Attributes {
    fn from(attribute: Attribute) -> Self {
        Self::from_iter([attribute])
    }
}

impl<const N: usize> From<[Attribute; N]> for Attributes {
    fn from(attributes: [Attribute; N]) -> Self {
        Self::from_iter(attributes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Attributes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Attributes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let attributes = Vec::<Attribute>::deserialize(deserializer)?;
        Ok(attributes.into_iter().collect())
    }
}
