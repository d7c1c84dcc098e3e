//! Paragraph-level layout properties.
//!
//! A [`ParagraphStyle`] travels as a single attribute. Paragraph modifiers
//! read the style currently in effect at the start of their target range,
//! change one property, and write the updated copy back, so successive
//! paragraph modifiers accumulate instead of replacing each other.

/// Horizontal alignment of lines within a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    /// Follows the writing direction.
    #[default]
    Natural,
    Left,
    Right,
    Center,
    Justified,
}

/// How lines too long for the container are broken or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineBreakMode {
    #[default]
    WordWrapping,
    CharWrapping,
    Clipping,
    TruncatingHead,
    TruncatingTail,
    TruncatingMiddle,
}

/// Direction glyphs are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WritingDirection {
    /// Derived from the content.
    #[default]
    Natural,
    LeftToRight,
    RightToLeft,
}

/// Paragraph layout properties. Lengths are in points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    pub first_line_head_indent: f64,
    pub head_indent: f64,
    /// Negative values measure from the trailing margin.
    pub tail_indent: f64,
    pub line_break_mode: LineBreakMode,
    pub line_height_multiple: f64,
    /// Zero means unbounded.
    pub maximum_line_height: f64,
    pub minimum_line_height: f64,
    pub line_spacing: f64,
    pub paragraph_spacing: f64,
    pub paragraph_spacing_before: f64,
    pub base_writing_direction: WritingDirection,
    /// Between 0.0 (never hyphenate) and 1.0.
    pub hyphenation_factor: f32,
}

impl ParagraphStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    #[must_use]
    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }
}
