use std::fmt;
use std::sync::Arc;

/// How a presentation surface should style an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disposition {
    #[default]
    Default,
    /// Dismisses without changes; surfaces show at most one.
    Cancel,
    /// Deletes or discards data.
    Destructive,
}

type Handler = Arc<dyn Fn() + Send + Sync>;

/// A labelled action with an optional callback.
#[derive(Clone)]
pub struct Action {
    label: String,
    disposition: Disposition,
    handler: Option<Handler>,
}

impl Action {
    #[must_use]
    pub fn new(label: impl Into<String>, disposition: Disposition) -> Self {
        Self {
            label: label.into(),
            disposition,
            handler: None,
        }
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn default(label: impl Into<String>) -> Self {
        Self::new(label, Disposition::Default)
    }

    #[must_use]
    pub fn cancel(label: impl Into<String>) -> Self {
        Self::new(label, Disposition::Cancel)
    }

    #[must_use]
    pub fn destructive(label: impl Into<String>) -> Self {
        Self::new(label, Disposition::Destructive)
    }

    /// Run `handler` when the action is chosen.
    #[must_use]
    pub fn on_select(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Invoke the callback, if any.
    pub fn run(&self) {
        if let Some(handler) = &self.handler {
            handler();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("disposition", &self.disposition)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

// Callbacks are not comparable; equality covers what a surface displays.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.disposition == other.disposition
    }
}

impl Eq for Action {}
