use rbuilder_core::{Block, BlockBuilder};

use crate::fragment::Fragment;
use crate::styled::StyledText;

/// Reduction rules for styled-text blocks.
///
/// A block concatenates its fragments into a single [`Fragment::Styled`], so
/// modifiers can be chained on the result of a nested block.
#[derive(Debug, Clone, Copy)]
pub struct TextBuilder;

/// A block of fragments.
pub type TextBlock = Block<TextBuilder>;

impl BlockBuilder for TextBuilder {
    type Component = Fragment;

    fn build_block(components: Vec<Fragment>) -> Fragment {
        let mut out = StyledText::new();
        for fragment in &components {
            fragment.contribute(&mut out);
        }
        Fragment::Styled(out)
    }

    fn build_optional(component: Option<Fragment>) -> Fragment {
        component.unwrap_or_default()
    }
}

impl StyledText {
    /// Compose styled text from a block of fragments.
    ///
    /// ```
    /// use rbuilder_text::{Color, Fragment, Modify, StyledText};
    ///
    /// let unread = 3;
    /// let text = StyledText::build(|b| {
    ///     b.push("Inbox".foreground_color(Color::BLUE));
    ///     b.push_if(unread > 0, || format!(" ({unread})"));
    ///     b.push(Fragment::line_break(1));
    /// });
    /// assert_eq!(text.as_str(), "Inbox (3)\n");
    /// ```
    pub fn build(body: impl FnOnce(&mut TextBlock)) -> StyledText {
        TextBlock::build(body).into_styled()
    }
}

/// Compose a fragment from a block, for nesting under further modifiers.
pub fn text(body: impl FnOnce(&mut TextBlock)) -> Fragment {
    TextBlock::build(body)
}
