//! Registry record pairing an action with its materialized view.

use std::fmt;

use crate::action::ActionRef;
use crate::view::ViewHandle;

/// An action together with the view currently rendered for it, if any.
///
/// `view` is only present while the most recent visibility check saw the
/// action as visible.
pub struct ActionWrapper {
    actual: ActionRef,
    view: Option<ViewHandle>,
}

impl ActionWrapper {
    pub(crate) fn new(actual: ActionRef) -> Self {
        Self { actual, view: None }
    }

    /// The wrapped action.
    pub fn action(&self) -> &ActionRef {
        &self.actual
    }

    /// The materialized view, if the action is currently rendered.
    pub fn view(&self) -> Option<&ViewHandle> {
        self.view.as_ref()
    }

    /// Whether a view is currently materialized.
    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    pub(crate) fn set_view(&mut self, view: ViewHandle) {
        self.view = Some(view);
    }

    pub(crate) fn take_view(&mut self) -> Option<ViewHandle> {
        self.view.take()
    }
}

impl fmt::Debug for ActionWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionWrapper")
            .field("view", &self.view.as_ref().map(ViewHandle::id))
            .finish_non_exhaustive()
    }
}
