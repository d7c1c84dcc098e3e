//! Font descriptors.
//!
//! A [`Font`] only describes the requested face; resolving it against the
//! fonts installed on a system is the rendering surface's job.

/// Font family selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    /// The platform's UI font.
    #[default]
    System,
    /// The platform's monospaced font.
    Monospace,
    /// A family looked up by name.
    Named(String),
}

/// Font weight, from thinnest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

/// A font request: family, point size and weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub family: FontFamily,
    pub size: f64,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Font {
    /// The system font at `size` points.
    #[must_use]
    pub fn system(size: f64) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    /// The bold system font at `size` points.
    #[must_use]
    pub fn bold_system(size: f64) -> Self {
        Self::system(size).weight(FontWeight::Bold)
    }

    /// The monospaced system font at `size` points.
    #[must_use]
    pub fn monospace(size: f64) -> Self {
        Self {
            family: FontFamily::Monospace,
            ..Self::system(size)
        }
    }

    /// A named family at `size` points.
    #[must_use]
    pub fn named(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: FontFamily::Named(family.into()),
            ..Self::system(size)
        }
    }

    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_system_differs_only_in_weight() {
        let bold = Font::bold_system(10.0);
        assert_eq!(bold.weight, FontWeight::Bold);
        assert_eq!(bold.clone().weight(FontWeight::Regular), Font::system(10.0));
    }

    #[test]
    fn named_keeps_family() {
        let font = Font::named("Menlo", 12.0).italic();
        assert_eq!(font.family, FontFamily::Named("Menlo".into()));
        assert!(font.italic);
        assert_eq!(font.size, 12.0);
    }
}
