//! Thread affinity verification.
//!
//! Toolbar state is owned by a single UI thread and is not guarded against
//! concurrent mutation. [`ThreadAffinity`] records the thread an object was
//! created on so later operations can verify they run there too.
//!
//! # Example
//!
//! ```
//! use actionbar_core::thread_check::ThreadAffinity;
//!
//! struct Strip {
//!     affinity: ThreadAffinity,
//!     items: Vec<u32>,
//! }
//!
//! impl Strip {
//!     fn push(&mut self, item: u32) {
//!         self.affinity.debug_assert_same_thread();
//!         self.items.push(item);
//!     }
//! }
//!
//! let mut strip = Strip { affinity: ThreadAffinity::current(), items: Vec::new() };
//! strip.push(1);
//! ```

use std::thread::ThreadId;

use crate::error::ThreadAffinityError;

/// Thread affinity tracker for objects.
#[derive(Debug, Clone, Copy)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create a new thread affinity tracker for the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Check the current thread, returning an error on mismatch.
    pub fn check(&self) -> Result<(), ThreadAffinityError> {
        let actual = std::thread::current().id();
        if actual == self.thread_id {
            Ok(())
        } else {
            Err(ThreadAffinityError::WrongThread {
                expected: self.thread_id,
                actual,
            })
        }
    }

    /// Assert that we are on the same thread as the affinity.
    ///
    /// This always runs (debug and release builds).
    ///
    /// # Panics
    ///
    /// Panics if called from a different thread.
    #[inline]
    pub fn assert_same_thread(&self) {
        if let Err(err) = self.check() {
            Self::panic_wrong_thread(&err);
        }
    }

    /// Debug-only assertion that we are on the same thread.
    ///
    /// This is a no-op in release builds.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }

    #[cold]
    #[inline(never)]
    fn panic_wrong_thread(err: &ThreadAffinityError) -> ! {
        let current = std::thread::current();
        let current_name = current.name().unwrap_or("<unnamed>");
        panic!(
            "THREAD AFFINITY VIOLATION: {err} (current thread \"{current_name}\"). \
             Toolbar state must only be touched from the thread that created it."
        )
    }
}
