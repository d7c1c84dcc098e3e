use tracing::warn;

use crate::action::{Action, Disposition};
use crate::list::{ActionBlock, ActionList};

/// How the surface presents the actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationStyle {
    /// A centered dialog.
    #[default]
    Alert,
    /// A sheet anchored to the bottom of the screen.
    ActionSheet,
}

/// A titled set of actions handed to a presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSheet {
    pub title: Option<String>,
    pub message: Option<String>,
    pub style: PresentationStyle,
    pub actions: ActionList,
}

impl ActionSheet {
    /// An alert built from a block of actions.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        body: impl FnOnce(&mut ActionBlock),
    ) -> Self {
        Self::with_style(title, message, PresentationStyle::Alert, body)
    }

    pub fn with_style(
        title: impl Into<String>,
        message: impl Into<String>,
        style: PresentationStyle,
        body: impl FnOnce(&mut ActionBlock),
    ) -> Self {
        let actions = ActionList::build(body);
        let cancels = actions
            .iter()
            .filter(|action| action.disposition() == Disposition::Cancel)
            .count();
        if cancels > 1 {
            warn!(cancels, "more than one cancel action; surfaces may show only the first");
        }
        Self {
            title: Some(title.into()).filter(|title| !title.is_empty()),
            message: Some(message.into()).filter(|message| !message.is_empty()),
            style,
            actions,
        }
    }

    /// Run the action at `index`. Returns `false` if there is none.
    pub fn select(&self, index: usize) -> bool {
        match self.actions.get(index) {
            Some(action) => {
                action.run();
                true
            }
            None => false,
        }
    }

    /// Run the cancel action, as when the surface is dismissed.
    pub fn dismiss(&self) -> Option<&Action> {
        let action = self.actions.cancel_action()?;
        action.run();
        Some(action)
    }
}
