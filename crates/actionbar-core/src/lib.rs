//! Core systems for Actionbar.
//!
//! This crate provides the infrastructure the action container is built on:
//!
//! - **Signal/Slot System**: Direct-dispatch change notification
//! - **Property System**: Values that report whether a write changed them
//! - **Thread Affinity**: Checks that UI-bound state stays on its owning thread
//! - **Logging**: Tracing targets, span names and log macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use actionbar_core::Signal;
//!
//! let visibility_changed = Signal::<bool>::new();
//!
//! let conn_id = visibility_changed.connect(|shown| {
//!     println!("Toolbar shown: {}", shown);
//! });
//!
//! visibility_changed.emit(true);
//! visibility_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use actionbar_core::{Property, Signal};
//!
//! struct Star {
//!     visible: Property<bool>,
//!     visible_changed: Signal<bool>,
//! }
//!
//! impl Star {
//!     fn set_visible(&self, visible: bool) {
//!         if self.visible.set(visible) {
//!             self.visible_changed.emit(visible);
//!         }
//!     }
//! }
//!
//! let star = Star { visible: Property::new(false), visible_changed: Signal::new() };
//! star.set_visible(true);
//! assert!(star.visible.get());
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;
pub mod thread_check;

pub use error::{CoreError, Result, SignalError, ThreadAffinityError};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
