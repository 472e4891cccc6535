//! Rendered views for toolbar actions.
//!
//! An [`ActionView`] is whatever a concrete action renders into: an icon
//! button, a progress indicator, a text badge. The container never looks
//! inside a view; it only attaches it to the host surface, toggles its
//! shown state for auto-hide, and hands it back to the action for binding.
//!
//! Views are shared between the container (which owns their lifecycle) and
//! the host surface (which lays them out), so they travel as a
//! [`ViewHandle`]: a cloneable, lockable reference carrying a stable
//! [`ViewId`].

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Upcast helper so trait objects can be downcast to their concrete type.
pub trait AsAny: Any {
    /// Get this as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get this as mutable `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A view materialized for an action.
pub trait ActionView: AsAny + Send + Sync {
    /// Show or hide the view without detaching it.
    fn set_shown(&mut self, shown: bool);

    /// Whether the view is currently shown.
    fn is_shown(&self) -> bool;
}

/// Unique identifier for a materialized view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        ViewId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value of this ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Shared reference to a materialized view.
///
/// Cloning a handle clones the reference, not the view.
#[derive(Clone)]
pub struct ViewHandle {
    id: ViewId,
    inner: Arc<RwLock<dyn ActionView>>,
}

impl ViewHandle {
    /// Wrap a freshly created view, assigning it a new [`ViewId`].
    pub fn new<V: ActionView>(view: V) -> Self {
        let inner: Arc<RwLock<dyn ActionView>> = Arc::new(RwLock::new(view));
        Self {
            id: ViewId::next(),
            inner,
        }
    }

    /// The view's identifier.
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Lock the view for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, dyn ActionView> {
        self.inner.read()
    }

    /// Lock the view for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, dyn ActionView> {
        self.inner.write()
    }

    /// Whether the view is currently shown.
    pub fn is_shown(&self) -> bool {
        self.inner.read().is_shown()
    }

    /// Show or hide the view.
    pub fn set_shown(&self, shown: bool) {
        self.inner.write().set_shown(shown);
    }

    /// Run `f` against the view if its concrete type is `V`.
    ///
    /// Returns `None` when the view is of another type.
    pub fn with<V: ActionView, R>(&self, f: impl FnOnce(&V) -> R) -> Option<R> {
        let guard = self.inner.read();
        let view: &dyn ActionView = &*guard;
        AsAny::as_any(view).downcast_ref::<V>().map(f)
    }

    /// Run `f` against the view mutably if its concrete type is `V`.
    ///
    /// This is how an action's `bind` reaches its own view type.
    pub fn with_mut<V: ActionView, R>(&self, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        let mut guard = self.inner.write();
        let view: &mut dyn ActionView = &mut *guard;
        AsAny::as_any_mut(view).downcast_mut::<V>().map(f)
    }

    /// Whether two handles refer to the same view.
    pub fn ptr_eq(&self, other: &ViewHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHandle")
            .field("id", &self.id)
            .field("shown", &self.is_shown())
            .finish()
    }
}

static_assertions::assert_impl_all!(ViewHandle: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct IconView {
        icon: &'static str,
        shown: bool,
    }

    impl ActionView for IconView {
        fn set_shown(&mut self, shown: bool) {
            self.shown = shown;
        }

        fn is_shown(&self) -> bool {
            self.shown
        }
    }

    struct BadgeView;

    impl ActionView for BadgeView {
        fn set_shown(&mut self, _shown: bool) {}

        fn is_shown(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_view_ids_are_unique() {
        let a = ViewHandle::new(BadgeView);
        let b = ViewHandle::new(BadgeView);
        assert_ne!(a.id(), b.id());
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_downcast_access() {
        let handle = ViewHandle::new(IconView {
            icon: "star",
            shown: true,
        });

        assert_eq!(handle.with(|v: &IconView| v.icon), Some("star"));
        assert_eq!(handle.with(|_: &BadgeView| ()), None);

        handle.with_mut(|v: &mut IconView| v.icon = "star_filled");
        assert_eq!(handle.with(|v: &IconView| v.icon), Some("star_filled"));
    }

    #[test]
    fn test_shown_toggle() {
        let handle = ViewHandle::new(IconView {
            icon: "reload",
            shown: true,
        });
        handle.set_shown(false);
        assert!(!handle.is_shown());
        assert!(!handle.read().is_shown());
        handle.write().set_shown(true);
        assert!(handle.is_shown());
    }
}
