use rbuilder_core::{Block, BlockBuilder};

use crate::action::{Action, Disposition};

/// An ordered list of actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a block of actions.
    pub fn build(body: impl FnOnce(&mut ActionBlock)) -> Self {
        ActionBlock::build(body)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    /// The first action with `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.label() == label)
    }

    /// The first cancel action.
    #[must_use]
    pub fn cancel_action(&self) -> Option<&Action> {
        self.actions
            .iter()
            .find(|action| action.disposition() == Disposition::Cancel)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Action> {
        self.actions
    }
}

impl From<Action> for ActionList {
    fn from(action: Action) -> Self {
        Self {
            actions: vec![action],
        }
    }
}

impl From<Vec<Action>> for ActionList {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for ActionList {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

/// Reduction rules for action blocks: every rule flattens in order.
#[derive(Debug, Clone, Copy)]
pub struct ActionListBuilder;

/// A block of actions.
pub type ActionBlock = Block<ActionListBuilder>;

impl BlockBuilder for ActionListBuilder {
    type Component = ActionList;

    fn build_block(components: Vec<ActionList>) -> ActionList {
        ActionList {
            actions: components.into_iter().flatten().collect(),
        }
    }

    fn build_optional(component: Option<ActionList>) -> ActionList {
        component.unwrap_or_default()
    }
}
