//! The host rendering surface.
//!
//! The container does not lay out or paint anything itself. It tells an
//! [`ActionSurface`] which views to attach, where, and at what size, and
//! whether the strip as a whole is shown.

use crate::view::{ViewHandle, ViewId};

/// Host-side rendering surface that child views are attached to.
pub trait ActionSurface {
    /// Attach `view` at `slot` among the currently attached views.
    ///
    /// `slot` is always in `0..=attached_count`. `size` is the fixed square
    /// edge length for the item.
    fn attach_view(&mut self, slot: usize, view: &ViewHandle, size: u32);

    /// Detach a previously attached view.
    fn detach_view(&mut self, view: ViewId);

    /// Show or hide the whole strip.
    fn set_visible(&mut self, visible: bool);

    /// Called once before a reconciliation pass that may attach or detach
    /// several views, so the host can animate the batch as one transition.
    fn begin_transition(&mut self) {}
}

/// A surface that discards everything.
///
/// Useful for headless containers whose views are read back directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl ActionSurface for NullSurface {
    fn attach_view(&mut self, _slot: usize, _view: &ViewHandle, _size: u32) {}

    fn detach_view(&mut self, _view: ViewId) {}

    fn set_visible(&mut self, _visible: bool) {}
}
