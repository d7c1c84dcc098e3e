//! Attribute modifiers.
//!
//! Every modifier consumes a fragment and returns a new [`Fragment`] with the
//! attribute merged over its target range: the whole fragment by default, or
//! the byte range chosen with [`Modify::in_range`].
//!
//! ```
//! use rbuilder_text::{Color, Font, Modify};
//!
//! let title = "Hello world"
//!     .font(Font::bold_system(18.0))
//!     .in_range(6..11)
//!     .foreground_color(Color::RED)
//!     .into_styled();
//! assert_eq!(title.as_str(), "Hello world");
//! ```

use std::ops::Range;

use crate::attribute::{Attribute, Attributes, LineStyle, Ligature, Shadow, TextEffect};
use crate::color::Color;
use crate::font::Font;
use crate::fragment::Fragment;
use crate::paragraph::{LineBreakMode, ParagraphStyle, TextAlignment, WritingDirection};
use crate::styled::StyledText;

/// A fragment narrowed to a byte range for the next modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranged {
    fragment: Fragment,
    range: Range<usize>,
}

impl From<Ranged> for Fragment {
    fn from(ranged: Ranged) -> Self {
        ranged.fragment
    }
}

/// Modifier methods shared by everything that converts into a [`Fragment`].
pub trait Modify: Sized {
    fn into_fragment(self) -> Fragment;

    /// The byte range the next modifier targets; `None` is the whole fragment.
    fn target(&self) -> Option<Range<usize>> {
        None
    }

    /// Run `f` on the composed text and its (clamped) target range.
    fn modify(self, f: impl FnOnce(&mut StyledText, Range<usize>)) -> Fragment {
        let target = self.target();
        let mut styled = self.into_fragment().into_styled();
        let range = match target {
            Some(range) => styled.clamp_range(range),
            None => 0..styled.len(),
        };
        f(&mut styled, range);
        Fragment::Styled(styled)
    }

    /// Target `range` (byte offsets) with the next modifier.
    fn in_range(self, range: Range<usize>) -> Ranged {
        Ranged {
            fragment: self.into_fragment(),
            range,
        }
    }

    fn with_attribute(self, attribute: Attribute) -> Fragment {
        self.with_attributes(&Attributes::from(attribute))
    }

    fn with_attributes(self, attributes: &Attributes) -> Fragment {
        self.modify(|styled, range| styled.apply(range, attributes))
    }

    /// Set `attribute` only where the key is not already set.
    fn with_default(self, attribute: Attribute) -> Fragment {
        let defaults = Attributes::from(attribute);
        self.modify(|styled, range| styled.apply_if_absent(range, &defaults))
    }

    fn default_font(self, font: Font) -> Fragment {
        self.with_default(Attribute::Font(font))
    }

    fn default_foreground_color(self, color: Color) -> Fragment {
        self.with_default(Attribute::ForegroundColor(color))
    }

    fn font(self, font: Font) -> Fragment {
        self.with_attribute(Attribute::Font(font))
    }

    fn foreground_color(self, color: Color) -> Fragment {
        self.with_attribute(Attribute::ForegroundColor(color))
    }

    fn background_color(self, color: Color) -> Fragment {
        self.with_attribute(Attribute::BackgroundColor(color))
    }

    fn baseline_offset(self, offset: f64) -> Fragment {
        self.with_attribute(Attribute::BaselineOffset(offset))
    }

    fn expansion(self, expansion: f64) -> Fragment {
        self.with_attribute(Attribute::Expansion(expansion))
    }

    fn kerning(self, kerning: f64) -> Fragment {
        self.with_attribute(Attribute::Kerning(kerning))
    }

    fn ligature(self, ligature: Ligature) -> Fragment {
        self.with_attribute(Attribute::Ligature(ligature))
    }

    fn obliqueness(self, obliqueness: f64) -> Fragment {
        self.with_attribute(Attribute::Obliqueness(obliqueness))
    }

    /// Strike through with `style`, optionally in `color`.
    fn strikethrough(self, style: LineStyle, color: impl Into<Option<Color>>) -> Fragment {
        let mut attributes = Attributes::from(Attribute::StrikethroughStyle(style));
        if let Some(color) = color.into() {
            attributes.insert(Attribute::StrikethroughColor(color));
        }
        self.with_attributes(&attributes)
    }

    /// Outline glyphs; `color` of `None` keeps the foreground color.
    fn stroke(self, width: f64, color: impl Into<Option<Color>>) -> Fragment {
        let mut attributes = Attributes::from(Attribute::StrokeWidth(width));
        if let Some(color) = color.into() {
            attributes.insert(Attribute::StrokeColor(color));
        }
        self.with_attributes(&attributes)
    }

    fn underline(self, style: LineStyle, color: impl Into<Option<Color>>) -> Fragment {
        let mut attributes = Attributes::from(Attribute::UnderlineStyle(style));
        if let Some(color) = color.into() {
            attributes.insert(Attribute::UnderlineColor(color));
        }
        self.with_attributes(&attributes)
    }

    fn shadow(self, shadow: Shadow) -> Fragment {
        self.with_attribute(Attribute::Shadow(shadow))
    }

    fn text_effect(self, effect: TextEffect) -> Fragment {
        self.with_attribute(Attribute::TextEffect(effect))
    }

    fn writing_direction(self, direction: WritingDirection) -> Fragment {
        self.with_attribute(Attribute::WritingDirection(direction))
    }

    /// Lay glyphs out vertically.
    fn vertical(self, vertical: bool) -> Fragment {
        self.with_attribute(Attribute::VerticalGlyphForm(vertical))
    }

    /// Replace the paragraph style on the target range.
    fn paragraph_style(self, style: ParagraphStyle) -> Fragment {
        self.with_attribute(Attribute::ParagraphStyle(style))
    }

    /// Edit the paragraph style of every run in the target range. Each run
    /// keeps its other paragraph settings.
    fn update_paragraph(self, edit: impl Fn(&mut ParagraphStyle)) -> Fragment {
        self.modify(|styled, range| {
            styled.update_range(range, |attributes| {
                let mut style = attributes.paragraph_style().cloned().unwrap_or_default();
                edit(&mut style);
                attributes.insert(Attribute::ParagraphStyle(style));
            });
        })
    }

    fn alignment(self, alignment: TextAlignment) -> Fragment {
        self.update_paragraph(|style| style.alignment = alignment)
    }

    fn first_line_head_indent(self, indent: f64) -> Fragment {
        self.update_paragraph(|style| style.first_line_head_indent = indent)
    }

    fn head_indent(self, indent: f64) -> Fragment {
        self.update_paragraph(|style| style.head_indent = indent)
    }

    fn tail_indent(self, indent: f64) -> Fragment {
        self.update_paragraph(|style| style.tail_indent = indent)
    }

    fn line_break_mode(self, mode: LineBreakMode) -> Fragment {
        self.update_paragraph(|style| style.line_break_mode = mode)
    }

    /// Line height as a multiple of the natural height, bounded by
    /// `minimum`/`maximum` (zero maximum is unbounded).
    fn line_height(self, multiple: f64, maximum: f64, minimum: f64) -> Fragment {
        self.update_paragraph(|style| {
            style.line_height_multiple = multiple;
            style.maximum_line_height = maximum;
            style.minimum_line_height = minimum;
        })
    }

    fn line_spacing(self, spacing: f64) -> Fragment {
        self.update_paragraph(|style| style.line_spacing = spacing)
    }

    fn paragraph_spacing(self, after: f64, before: f64) -> Fragment {
        self.update_paragraph(|style| {
            style.paragraph_spacing = after;
            style.paragraph_spacing_before = before;
        })
    }

    fn base_writing_direction(self, direction: WritingDirection) -> Fragment {
        self.update_paragraph(|style| style.base_writing_direction = direction)
    }

    fn hyphenation_factor(self, factor: f32) -> Fragment {
        self.update_paragraph(|style| style.hyphenation_factor = factor.clamp(0.0, 1.0))
    }
}

impl Modify for Fragment {
    fn into_fragment(self) -> Fragment {
        self
    }
}

impl Modify for StyledText {
    fn into_fragment(self) -> Fragment {
        Fragment::Styled(self)
    }
}

impl Modify for &str {
    fn into_fragment(self) -> Fragment {
        Fragment::text(self)
    }
}

impl Modify for String {
    fn into_fragment(self) -> Fragment {
        Fragment::text(self)
    }
}

impl Modify for Ranged {
    fn into_fragment(self) -> Fragment {
        self.fragment
    }

    fn target(&self) -> Option<Range<usize>> {
        Some(self.range.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_at(styled: &StyledText, offset: usize) -> Option<Color> {
        styled.attributes_at(offset).and_then(Attributes::foreground_color)
    }

    #[test]
    fn whole_fragment_by_default() {
        let styled = "abc".foreground_color(Color::RED).into_styled();
        assert_eq!(styled.run_count(), 1);
        assert_eq!(color_at(&styled, 2), Some(Color::RED));
    }

    #[test]
    fn sub_range_only() {
        let styled = "abcdef"
            .in_range(2..4)
            .foreground_color(Color::BLUE)
            .into_styled();
        assert_eq!(color_at(&styled, 1), None);
        assert_eq!(color_at(&styled, 2), Some(Color::BLUE));
        assert_eq!(color_at(&styled, 3), Some(Color::BLUE));
        assert_eq!(color_at(&styled, 4), None);
    }

    #[test]
    fn later_modifier_wins_on_overlap() {
        let styled = "abcdef"
            .foreground_color(Color::RED)
            .in_range(0..3)
            .foreground_color(Color::GREEN)
            .into_styled();
        assert_eq!(color_at(&styled, 0), Some(Color::GREEN));
        assert_eq!(color_at(&styled, 3), Some(Color::RED));
    }

    #[test]
    fn defaults_do_not_override() {
        let styled = Fragment::Styled(StyledText::from("plain"))
            .in_range(0..2)
            .foreground_color(Color::RED)
            .default_foreground_color(Color::GRAY)
            .into_styled();
        assert_eq!(color_at(&styled, 0), Some(Color::RED));
        assert_eq!(color_at(&styled, 4), Some(Color::GRAY));
    }

    #[test]
    fn optional_colors_on_lines() {
        let styled = "x"
            .underline(LineStyle::SINGLE, Color::RED)
            .strikethrough(LineStyle::DOUBLE, None)
            .into_styled();
        let attributes = styled.attributes_at(0).cloned().unwrap_or_default();
        assert_eq!(attributes.underline_style(), Some(LineStyle::SINGLE));
        assert_eq!(attributes.strikethrough_style(), Some(LineStyle::DOUBLE));
        assert!(attributes.contains_key(crate::AttributeKey::UnderlineColor));
        assert!(!attributes.contains_key(crate::AttributeKey::StrikethroughColor));
    }

    #[test]
    fn paragraph_modifiers_accumulate() {
        let styled = "para"
            .alignment(TextAlignment::Center)
            .line_spacing(3.0)
            .paragraph_spacing(8.0, 2.0)
            .into_styled();
        let style = styled.paragraph_style_at(0);
        assert_eq!(style.alignment, TextAlignment::Center);
        assert_eq!(style.line_spacing, 3.0);
        assert_eq!(style.paragraph_spacing, 8.0);
        assert_eq!(style.paragraph_spacing_before, 2.0);
    }

    #[test]
    fn paragraph_settings_stay_in_their_range() {
        let ranged_first = "ab"
            .in_range(0..1)
            .alignment(TextAlignment::Center)
            .line_spacing(5.0)
            .into_styled();
        let whole_first = "ab"
            .line_spacing(5.0)
            .in_range(0..1)
            .alignment(TextAlignment::Center)
            .into_styled();
        assert_eq!(ranged_first, whole_first);

        let a = ranged_first.paragraph_style_at(0);
        let b = ranged_first.paragraph_style_at(1);
        assert_eq!(a.alignment, TextAlignment::Center);
        assert_eq!(b.alignment, TextAlignment::Natural);
        assert_eq!(a.line_spacing, 5.0);
        assert_eq!(b.line_spacing, 5.0);
    }

    #[test]
    fn hyphenation_factor_is_clamped() {
        let styled = "h".hyphenation_factor(3.0).into_styled();
        assert_eq!(styled.paragraph_style_at(0).hyphenation_factor, 1.0);
    }

    #[test]
    fn modifier_on_empty_fragment_is_legal() {
        let styled = Fragment::empty().font(Font::system(12.0)).into_styled();
        assert!(styled.is_empty());
        assert_eq!(styled.run_count(), 0);
    }
}
