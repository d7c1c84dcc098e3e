//! Fragments: the components of a styled-text block.

use url::Url;

use crate::attribute::{Attribute, Attributes};
use crate::image::{Image, ImageAttachment, OBJECT_REPLACEMENT};
use crate::styled::StyledText;

/// One unit of styled-text contribution.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fragment {
    /// Contributes nothing.
    #[default]
    Empty,
    /// A run of text with its own attributes.
    Text { text: String, attributes: Attributes },
    /// `n` space characters.
    Space(usize),
    /// `n` newline characters.
    LineBreak(usize),
    /// Text linking to `url`.
    Link {
        text: String,
        url: Url,
        attributes: Attributes,
    },
    /// An inline image occupying one object-replacement character.
    Image(ImageAttachment),
    /// Already-composed styled text, as produced by a block or a modifier.
    Styled(StyledText),
}

impl Fragment {
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::text_with(text, Attributes::new())
    }

    #[must_use]
    pub fn text_with(text: impl Into<String>, attributes: impl Into<Attributes>) -> Self {
        Self::Text {
            text: text.into(),
            attributes: attributes.into(),
        }
    }

    #[must_use]
    pub fn space(count: usize) -> Self {
        Self::Space(count)
    }

    #[must_use]
    pub fn line_break(count: usize) -> Self {
        Self::LineBreak(count)
    }

    #[must_use]
    pub fn link(text: impl Into<String>, url: Url) -> Self {
        Self::Link {
            text: text.into(),
            url,
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn image(attachment: ImageAttachment) -> Self {
        Self::Image(attachment)
    }

    /// Append this fragment's text and attributes to `out`.
    pub fn contribute(&self, out: &mut StyledText) {
        match self {
            Self::Empty => {}
            Self::Text { text, attributes } => out.push_str(text, attributes.clone()),
            Self::Space(count) => out.push_str(&" ".repeat(*count), Attributes::new()),
            Self::LineBreak(count) => out.push_str(&"\n".repeat(*count), Attributes::new()),
            Self::Link {
                text,
                url,
                attributes,
            } => {
                let mut attributes = attributes.clone();
                attributes.insert(Attribute::Link(url.clone()));
                out.push_str(text, attributes);
            }
            Self::Image(attachment) => {
                let mut buf = [0; 4];
                out.push_str(
                    OBJECT_REPLACEMENT.encode_utf8(&mut buf),
                    Attributes::from(Attribute::Attachment(attachment.clone())),
                );
            }
            Self::Styled(styled) => out.append(styled),
        }
    }

    /// The fragment as styled text on its own.
    #[must_use]
    pub fn into_styled(self) -> StyledText {
        match self {
            Self::Styled(styled) => styled,
            other => {
                let mut out = StyledText::new();
                other.contribute(&mut out);
                out
            }
        }
    }

    /// `true` if contributing this fragment adds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text { text, .. } | Self::Link { text, .. } => text.is_empty(),
            Self::Space(count) | Self::LineBreak(count) => *count == 0,
            Self::Image(_) => false,
            Self::Styled(styled) => styled.is_empty(),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<StyledText> for Fragment {
    fn from(styled: StyledText) -> Self {
        Self::Styled(styled)
    }
}

impl From<ImageAttachment> for Fragment {
    fn from(attachment: ImageAttachment) -> Self {
        Self::Image(attachment)
    }
}

impl From<Image> for Fragment {
    fn from(image: Image) -> Self {
        Self::Image(ImageAttachment::new(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::image::Size;

    #[test]
    fn zero_repetitions_contribute_nothing() {
        assert!(Fragment::space(0).into_styled().is_empty());
        assert!(Fragment::line_break(0).into_styled().is_empty());
        assert!(Fragment::space(0).is_empty());
    }

    #[test]
    fn repetitions_expand() {
        assert_eq!(Fragment::space(3).into_styled().as_str(), "   ");
        assert_eq!(Fragment::line_break(2).into_styled().as_str(), "\n\n");
    }

    #[test]
    fn link_stores_destination_as_attribute() {
        let url = Url::parse("https://www.rakuten.co.jp/").expect("valid url");
        let styled = Fragment::link("shop", url.clone()).into_styled();
        assert_eq!(styled.as_str(), "shop");
        assert_eq!(styled.attributes_at(0).and_then(Attributes::link), Some(&url));
    }

    #[test]
    fn image_is_one_replacement_character() {
        let image = Image::new("icon", Size::new(16.0, 16.0));
        let styled = Fragment::from(image.clone()).into_styled();
        assert_eq!(styled.as_str(), "\u{FFFC}");
        assert_eq!(
            styled.attributes_at(0).and_then(Attributes::attachment),
            Some(&ImageAttachment::new(image))
        );
    }

    #[test]
    fn text_with_attributes() {
        let fragment = Fragment::text_with("hi", Attribute::ForegroundColor(Color::GREEN));
        let styled = fragment.into_styled();
        assert_eq!(
            styled.attributes_at(1).and_then(Attributes::foreground_color),
            Some(Color::GREEN)
        );
    }
}
