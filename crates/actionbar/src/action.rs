//! The action capability.
//!
//! An [`Action`] is a logical toolbar item (bookmark star, reload, share)
//! that knows whether it should currently be shown and how to render
//! itself. Actions are supplied and owned by the caller; the container only
//! holds shared references and never switches on the concrete type.
//!
//! # Example
//!
//! ```
//! use actionbar::{Action, ActionContainerConfig, ActionView, ViewHandle};
//! use actionbar_core::Property;
//!
//! struct ReloadView {
//!     loading: bool,
//!     shown: bool,
//! }
//!
//! impl ActionView for ReloadView {
//!     fn set_shown(&mut self, shown: bool) { self.shown = shown; }
//!     fn is_shown(&self) -> bool { self.shown }
//! }
//!
//! struct Reload {
//!     loading: Property<bool>,
//! }
//!
//! impl Action for Reload {
//!     fn create_view(&self, _config: &ActionContainerConfig) -> ViewHandle {
//!         ViewHandle::new(ReloadView { loading: false, shown: true })
//!     }
//!
//!     fn bind(&self, view: &ViewHandle) {
//!         let loading = self.loading.get();
//!         view.with_mut(|v: &mut ReloadView| v.loading = loading);
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::config::ActionContainerConfig;
use crate::view::ViewHandle;

/// A toolbar action that can produce and refresh its own view.
pub trait Action: Send + Sync {
    /// Whether the action should currently be displayed.
    fn visible(&self) -> bool {
        true
    }

    /// Whether the action's view follows [`auto_hide_action`] toggles.
    ///
    /// [`auto_hide_action`]: crate::ActionContainer::auto_hide_action
    fn auto_hide(&self) -> bool {
        false
    }

    /// Create a new view for this action.
    fn create_view(&self, config: &ActionContainerConfig) -> ViewHandle;

    /// Refresh `view` with the action's current display state.
    fn bind(&self, view: &ViewHandle);
}

/// Shared reference to an externally owned action.
pub type ActionRef = Arc<dyn Action>;

/// Identity comparison for actions.
///
/// Two references are the same action when they point at the same
/// allocation, regardless of vtable.
pub fn same_action(a: &ActionRef, b: &ActionRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ActionView;

    struct Blank;

    impl ActionView for Blank {
        fn set_shown(&mut self, _shown: bool) {}

        fn is_shown(&self) -> bool {
            true
        }
    }

    struct Share;

    impl Action for Share {
        fn create_view(&self, _config: &ActionContainerConfig) -> ViewHandle {
            ViewHandle::new(Blank)
        }

        fn bind(&self, _view: &ViewHandle) {}
    }

    #[test]
    fn test_default_capabilities() {
        let share = Share;
        assert!(share.visible());
        assert!(!share.auto_hide());
    }

    #[test]
    fn test_same_action_is_identity() {
        let a: ActionRef = Arc::new(Share);
        let b: ActionRef = Arc::new(Share);
        assert!(same_action(&a, &a.clone()));
        assert!(!same_action(&a, &b));
    }
}
