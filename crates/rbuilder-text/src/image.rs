//! Inline image placeholders.
//!
//! The builder never decodes pixels: an [`Image`] is a reference (name plus
//! natural size) that the rendering surface resolves. An attachment occupies a
//! single [`OBJECT_REPLACEMENT`] character in the composed text.

/// The character an inline attachment occupies in the composed text.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Width and height in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height, `None` for degenerate sizes.
    #[must_use]
    pub fn aspect_ratio(self) -> Option<f64> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

/// A reference to an image the rendering surface knows how to load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    pub name: String,
    pub size: Size,
}

impl Image {
    #[must_use]
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// An image placed inline, with the bounds it should be drawn at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageAttachment {
    pub image: Image,
    /// `None` draws the image at its natural size.
    pub bounds: Option<Size>,
}

impl ImageAttachment {
    /// Attach at the image's natural size.
    #[must_use]
    pub fn new(image: Image) -> Self {
        Self {
            image,
            bounds: None,
        }
    }

    /// Attach at exactly `size`, ignoring the image's aspect ratio.
    #[must_use]
    pub fn sized(image: Image, size: Size) -> Self {
        Self {
            image,
            bounds: Some(size),
        }
    }

    /// Attach scaled to `bounding`, keeping the image's aspect ratio.
    ///
    /// The longer side of `bounding` is kept and the other side is derived
    /// from the aspect ratio. Images with a zero dimension fall back to
    /// `bounding` as-is.
    #[must_use]
    pub fn fitted(image: Image, bounding: Size) -> Self {
        let bounds = match image.size.aspect_ratio() {
            Some(aspect) if bounding.width > bounding.height => {
                Size::new(bounding.width, bounding.width / aspect)
            }
            Some(aspect) => Size::new(bounding.height * aspect, bounding.height),
            None => bounding,
        };
        Self {
            image,
            bounds: Some(bounds),
        }
    }

    /// The size the attachment will be drawn at.
    #[must_use]
    pub fn drawn_size(&self) -> Size {
        self.bounds.unwrap_or(self.image.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> Image {
        Image::new("photo", Size::new(200.0, 100.0))
    }

    #[test]
    fn natural_size_without_bounds() {
        let attachment = ImageAttachment::new(photo());
        assert_eq!(attachment.drawn_size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn explicit_size_is_kept_verbatim() {
        let attachment = ImageAttachment::sized(photo(), Size::new(10.0, 10.0));
        assert_eq!(attachment.drawn_size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn wide_box_fixes_width() {
        let attachment = ImageAttachment::fitted(photo(), Size::new(40.0, 10.0));
        assert_eq!(attachment.drawn_size(), Size::new(40.0, 20.0));
    }

    #[test]
    fn tall_box_fixes_height() {
        let attachment = ImageAttachment::fitted(photo(), Size::new(10.0, 30.0));
        assert_eq!(attachment.drawn_size(), Size::new(60.0, 30.0));
    }

    #[test]
    fn degenerate_image_uses_box() {
        let flat = Image::new("flat", Size::new(10.0, 0.0));
        let attachment = ImageAttachment::fitted(flat, Size::new(8.0, 8.0));
        assert_eq!(attachment.drawn_size(), Size::new(8.0, 8.0));
    }
}
