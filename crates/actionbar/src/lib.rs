//! A strip of optional toolbar actions.
//!
//! Browser-style toolbars carry a handful of small actions (bookmark star,
//! reload, share) that appear and disappear as page state changes. This
//! crate provides [`ActionContainer`], which keeps those actions in order,
//! creates and drops their views as their visibility changes, and keeps a
//! trailing region for end-bound actions that must render after all the
//! normal ones.
//!
//! Rendering is delegated: actions implement [`Action`] and produce
//! [`ActionView`]s, and the host implements [`ActionSurface`] to lay them
//! out.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use actionbar::{Action, ActionContainer, ActionContainerConfig, ActionRef, ActionView,
//!     NullSurface, ViewHandle};
//! use actionbar_core::Property;
//!
//! struct Icon { shown: bool }
//!
//! impl ActionView for Icon {
//!     fn set_shown(&mut self, shown: bool) { self.shown = shown; }
//!     fn is_shown(&self) -> bool { self.shown }
//! }
//!
//! struct Star { bookmarked: Property<bool> }
//!
//! impl Action for Star {
//!     fn visible(&self) -> bool { self.bookmarked.get() }
//!     fn create_view(&self, _config: &ActionContainerConfig) -> ViewHandle {
//!         ViewHandle::new(Icon { shown: true })
//!     }
//!     fn bind(&self, _view: &ViewHandle) {}
//! }
//!
//! let star = Arc::new(Star { bookmarked: Property::new(false) });
//! let star_ref: ActionRef = star.clone();
//!
//! let mut container = ActionContainer::new(NullSurface, ActionContainerConfig::new());
//! container.add_action(star_ref.clone());
//! assert!(!container.is_visible());
//!
//! star.bookmarked.set(true);
//! container.invalidate_actions();
//! assert!(container.is_visible());
//! assert!(container.view_of(&star_ref).is_some());
//! ```

pub mod action;
pub mod boundary;
pub mod config;
pub mod container;
mod error;
pub mod surface;
pub mod view;
pub mod wrapper;

pub use action::{same_action, Action, ActionRef};
pub use boundary::EndBoundTracker;
pub use config::ActionContainerConfig;
pub use container::ActionContainer;
pub use error::{ConfigError, Result};
pub use surface::{ActionSurface, NullSurface};
pub use view::{ActionView, AsAny, ViewHandle, ViewId};
pub use wrapper::ActionWrapper;
