//! ActionContainer implementation.
//!
//! This module provides [`ActionContainer`], a horizontal strip of optional
//! toolbar actions. It keeps the actions in render order, creates and
//! destroys their views as visibility changes, and reserves a trailing
//! region for end-bound actions that always render after normal ones.
//!
//! # Example
//!
//! ```ignore
//! use actionbar::{ActionContainer, ActionContainerConfig, NullSurface};
//! use std::sync::Arc;
//!
//! let mut container = ActionContainer::new(
//!     NullSurface,
//!     ActionContainerConfig::new().with_action_size(48),
//! );
//!
//! container.add_action(Arc::new(BookmarkStar::new()));
//! container.add_end_bound_item(Arc::new(TabCounter::new()));
//!
//! container.visibility_changed.connect(|shown| {
//!     println!("toolbar actions shown: {}", shown);
//! });
//!
//! // After actions change their visibility:
//! container.invalidate_actions();
//! ```

use std::fmt;

use actionbar_core::logging::{span_names, targets};
use actionbar_core::{PerfSpan, Property, Signal, ThreadAffinity};

use crate::action::{same_action, ActionRef};
use crate::boundary::EndBoundTracker;
use crate::config::ActionContainerConfig;
use crate::surface::ActionSurface;
use crate::view::ViewHandle;
use crate::wrapper::ActionWrapper;

// ============================================================================
// ActionContainer
// ============================================================================

/// An ordered strip of toolbar actions with a pinned trailing subgroup.
///
/// Normal actions are always positioned before end-bound actions. Each
/// action's view exists only while the action reports itself visible; the
/// container creates, attaches, detaches and drops views as needed.
///
/// # Signals
///
/// - [`visibility_changed`](ActionContainer::visibility_changed): Emitted when the strip is shown or hidden
/// - [`action_inserted`](ActionContainer::action_inserted): Emitted with the registry position of a new action
/// - [`action_removed`](ActionContainer::action_removed): Emitted with the former position of a removed action
///
/// # Threading
///
/// The container is owned by one (UI) thread. Mutations from another thread
/// panic in debug builds.
pub struct ActionContainer<S: ActionSurface> {
    /// Host rendering surface.
    surface: S,

    /// Construction-time configuration.
    config: ActionContainerConfig,

    /// Actions in render order.
    actions: Vec<ActionWrapper>,

    /// Start of the end-bound run and the advisory limit.
    end_bound: EndBoundTracker,

    /// Whether the strip as a whole is shown.
    visible: Property<bool>,

    affinity: ThreadAffinity,

    // Signals
    /// Signal emitted when the strip's overall visibility changes.
    pub visibility_changed: Signal<bool>,
    /// Signal emitted when an action is inserted, with its position.
    pub action_inserted: Signal<usize>,
    /// Signal emitted when an action is removed, with its former position.
    pub action_removed: Signal<usize>,
}

impl<S: ActionSurface> ActionContainer<S> {
    /// Create an empty, hidden container on `surface`.
    pub fn new(mut surface: S, config: ActionContainerConfig) -> Self {
        surface.set_visible(false);
        Self {
            surface,
            config,
            actions: Vec::new(),
            end_bound: EndBoundTracker::new(),
            visible: Property::new(false),
            affinity: ThreadAffinity::current(),
            visibility_changed: Signal::new(),
            action_inserted: Signal::new(),
            action_removed: Signal::new(),
        }
    }

    // =========================================================================
    // Registry - Add / Remove
    // =========================================================================

    /// Add a normal action.
    ///
    /// The action is placed after all existing normal actions and before any
    /// end-bound actions. If it is visible its view is created and attached
    /// and the strip is shown.
    pub fn add_action(&mut self, action: ActionRef) {
        self.affinity.debug_assert_same_thread();

        let index = self.end_bound.insert_normal(self.actions.len());
        self.actions.insert(index, ActionWrapper::new(action));
        tracing::trace!(
            target: targets::CONTAINER,
            index,
            end_bound_index = ?self.end_bound.start(),
            "added action"
        );

        self.materialize_if_visible(index);
        self.action_inserted.emit(index);
    }

    /// Add an end-bound action.
    ///
    /// End-bound actions are always appended, after every other action
    /// including earlier end-bound ones. The first one opens the end-bound
    /// region.
    pub fn add_end_bound_item(&mut self, action: ActionRef) {
        self.affinity.debug_assert_same_thread();

        let index = self.end_bound.insert_end_bound(self.actions.len());
        self.actions.push(ActionWrapper::new(action));
        tracing::trace!(
            target: targets::CONTAINER,
            index,
            end_bound_index = ?self.end_bound.start(),
            "added end-bound action"
        );

        self.materialize_if_visible(index);
        self.action_inserted.emit(index);
    }

    /// Remove an action, detaching its view.
    ///
    /// Actions are matched by identity. Returns `false` and does nothing if
    /// the action is not in the container.
    pub fn remove_action(&mut self, action: &ActionRef) -> bool {
        self.affinity.debug_assert_same_thread();

        let Some(index) = self.index_of(action) else {
            tracing::trace!(target: targets::CONTAINER, "remove_action: action not present");
            return false;
        };

        let before = self.end_bound.start();
        self.end_bound.remove(index, self.actions.len());
        let mut wrapper = self.actions.remove(index);
        if let Some(view) = wrapper.take_view() {
            self.surface.detach_view(view.id());
        }
        tracing::trace!(
            target: targets::CONTAINER,
            index,
            ?before,
            after = ?self.end_bound.start(),
            "removed action"
        );

        self.action_removed.emit(index);
        true
    }

    /// Record the advisory end-bound limit.
    ///
    /// This does not move or validate existing actions.
    pub fn set_end_bound_limit(&mut self, has_end_bound_actions: bool, count: usize) {
        self.affinity.debug_assert_same_thread();
        self.end_bound.set_limit(has_end_bound_actions, count);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Reconcile every action's view with its current visibility.
    ///
    /// Newly visible actions get a view, newly invisible ones lose theirs,
    /// and every remaining view is re-bound. The strip is shown if at least
    /// one action is visible and hidden otherwise.
    pub fn invalidate_actions(&mut self) {
        self.affinity.debug_assert_same_thread();
        let _span = PerfSpan::new(span_names::INVALIDATE);

        self.surface.begin_transition();

        let mut any_visible = false;
        let mut created = 0usize;
        let mut destroyed = 0usize;
        let mut slot = 0usize;

        for wrapper in &mut self.actions {
            let visible = wrapper.action().visible();

            if visible && !wrapper.has_view() {
                let view = wrapper.action().create_view(&self.config);
                self.surface
                    .attach_view(slot, &view, self.config.action_size);
                wrapper.set_view(view);
                created += 1;
            } else if !visible {
                if let Some(view) = wrapper.take_view() {
                    self.surface.detach_view(view.id());
                    destroyed += 1;
                }
            }

            if let Some(view) = wrapper.view() {
                wrapper.action().bind(view);
                slot += 1;
            }

            any_visible |= visible;
        }

        tracing::debug!(
            target: targets::CONTAINER,
            created,
            destroyed,
            attached = slot,
            "invalidated actions"
        );

        self.set_visible(any_visible);
    }

    /// Show or hide the views of every auto-hide action.
    ///
    /// Views stay attached; only their shown state changes. Actions without
    /// a view, or that do not opt into auto-hide, are untouched.
    pub fn auto_hide_action(&mut self, is_visible: bool) {
        self.affinity.debug_assert_same_thread();

        for wrapper in &self.actions {
            if !wrapper.action().auto_hide() {
                continue;
            }
            if let Some(view) = wrapper.view() {
                view.set_shown(is_visible);
            }
        }
    }

    /// Whether the strip is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible.set(visible) {
            self.surface.set_visible(visible);
            self.visibility_changed.emit(visible);
        }
    }

    fn materialize_if_visible(&mut self, index: usize) {
        if !self.actions[index].action().visible() {
            return;
        }
        self.set_visible(true);

        let view = self.actions[index].action().create_view(&self.config);
        let slot = self.actions[..index]
            .iter()
            .filter(|wrapper| wrapper.has_view())
            .count();
        self.add_action_view(slot, &view);
        self.actions[index].set_view(view);
    }

    fn add_action_view(&mut self, slot: usize, view: &ViewHandle) {
        self.surface.attach_view(slot, view, self.config.action_size);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of actions, normal and end-bound.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the container holds no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// All actions in render order.
    pub fn actions(&self) -> &[ActionWrapper] {
        &self.actions
    }

    /// The normal actions, in render order.
    pub fn normal_actions(&self) -> &[ActionWrapper] {
        let end = self.end_bound.start().unwrap_or(self.actions.len());
        &self.actions[..end]
    }

    /// The end-bound actions, in render order.
    pub fn end_bound_actions(&self) -> &[ActionWrapper] {
        let start = self.end_bound.start().unwrap_or(self.actions.len());
        &self.actions[start..]
    }

    /// Position of `action` in the registry.
    pub fn index_of(&self, action: &ActionRef) -> Option<usize> {
        self.actions
            .iter()
            .position(|wrapper| same_action(wrapper.action(), action))
    }

    /// Whether `action` is in the container.
    pub fn contains(&self, action: &ActionRef) -> bool {
        self.index_of(action).is_some()
    }

    /// The materialized view of `action`, if any.
    pub fn view_of(&self, action: &ActionRef) -> Option<&ViewHandle> {
        self.index_of(action)
            .and_then(|index| self.actions[index].view())
    }

    /// Index where the end-bound region starts, or `None` if it is empty.
    pub fn end_bound_index(&self) -> Option<usize> {
        self.end_bound.start()
    }

    /// The advisory end-bound limit as `(has_end_bound_actions, count)`.
    pub fn end_bound_limit(&self) -> (bool, usize) {
        self.end_bound.limit()
    }

    /// The configuration this container was built with.
    pub fn config(&self) -> &ActionContainerConfig {
        &self.config
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: ActionSurface + fmt::Debug> fmt::Debug for ActionContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContainer")
            .field("surface", &self.surface)
            .field("config", &self.config)
            .field("actions", &self.actions)
            .field("end_bound", &self.end_bound)
            .field("visible", &self.visible.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(ActionContainer<crate::NullSurface>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::surface::NullSurface;
    use crate::view::ActionView;
    use std::sync::Arc;

    struct Chip {
        shown: bool,
    }

    impl ActionView for Chip {
        fn set_shown(&mut self, shown: bool) {
            self.shown = shown;
        }

        fn is_shown(&self) -> bool {
            self.shown
        }
    }

    struct Toggle {
        visible: Property<bool>,
        auto_hide: bool,
    }

    impl Toggle {
        fn new(visible: bool) -> Arc<Self> {
            Arc::new(Self {
                visible: Property::new(visible),
                auto_hide: false,
            })
        }
    }

    impl Action for Toggle {
        fn visible(&self) -> bool {
            self.visible.get()
        }

        fn auto_hide(&self) -> bool {
            self.auto_hide
        }

        fn create_view(&self, _config: &ActionContainerConfig) -> ViewHandle {
            ViewHandle::new(Chip { shown: true })
        }

        fn bind(&self, _view: &ViewHandle) {}
    }

    fn container() -> ActionContainer<NullSurface> {
        ActionContainer::new(NullSurface, ActionContainerConfig::default())
    }

    #[test]
    fn test_container_new() {
        let container = container();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
        assert_eq!(container.end_bound_index(), None);
        assert!(!container.is_visible());
        assert_eq!(container.config().action_size, 0);
    }

    #[test]
    fn test_add_visible_action_shows_strip() {
        let mut container = container();
        let action: ActionRef = Toggle::new(true);
        container.add_action(action.clone());

        assert!(container.is_visible());
        assert!(container.view_of(&action).is_some());
    }

    #[test]
    fn test_add_invisible_action_has_no_view() {
        let mut container = container();
        let action: ActionRef = Toggle::new(false);
        container.add_action(action.clone());

        assert!(!container.is_visible());
        assert!(container.contains(&action));
        assert!(container.view_of(&action).is_none());
    }

    #[test]
    fn test_normal_and_end_bound_slices() {
        let mut container = container();
        let a: ActionRef = Toggle::new(true);
        let tabs: ActionRef = Toggle::new(true);
        let b: ActionRef = Toggle::new(true);

        container.add_action(a.clone());
        container.add_end_bound_item(tabs.clone());
        container.add_action(b.clone());

        assert_eq!(container.normal_actions().len(), 2);
        assert_eq!(container.end_bound_actions().len(), 1);
        assert!(same_action(container.end_bound_actions()[0].action(), &tabs));
        assert_eq!(container.index_of(&b), Some(1));
    }

    #[test]
    fn test_remove_unknown_action_is_noop() {
        let mut container = container();
        container.add_action(Toggle::new(true));
        let stranger: ActionRef = Toggle::new(true);

        assert!(!container.remove_action(&stranger));
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_debug_output() {
        let mut container = container();
        container.add_action(Toggle::new(true));
        let debug = format!("{container:?}");
        assert!(debug.contains("ActionContainer"));
        assert!(debug.contains("ActionWrapper"));
    }
}
