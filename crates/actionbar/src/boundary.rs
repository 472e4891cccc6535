//! Bookkeeping for the trailing end-bound subgroup.
//!
//! The registry is split into normal actions followed by end-bound actions.
//! [`EndBoundTracker`] owns the index where the end-bound run starts and keeps
//! it correct across insertions and removals. It never touches the registry
//! itself; callers report what they did and ask where to insert.

/// Where the end-bound subgroup begins, plus the advisory limit flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndBoundTracker {
    has_end_bound_actions: bool,
    end_bound_action_count: usize,
    start: Option<usize>,
}

impl EndBoundTracker {
    /// Create a tracker with no end-bound subgroup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first end-bound entry, or `None` when there is none.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Record the advisory limit. Existing entries are not checked against it.
    pub fn set_limit(&mut self, has_end_bound_actions: bool, count: usize) {
        self.has_end_bound_actions = has_end_bound_actions;
        self.end_bound_action_count = count;
    }

    /// The advisory limit as `(has_end_bound_actions, count)`.
    pub fn limit(&self) -> (bool, usize) {
        (self.has_end_bound_actions, self.end_bound_action_count)
    }

    /// Reserve the position for a new normal entry in a registry of `len`.
    ///
    /// Normal entries go directly before the end-bound run, which shifts the
    /// run one to the right; without a run they are appended.
    pub fn insert_normal(&mut self, len: usize) -> usize {
        match self.start.as_mut() {
            Some(start) => {
                let at = *start;
                *start += 1;
                at
            }
            None => len,
        }
    }

    /// Reserve the position for a new end-bound entry in a registry of `len`.
    ///
    /// End-bound entries are always appended. The first one opens the run.
    pub fn insert_end_bound(&mut self, len: usize) -> usize {
        if self.start.is_none() {
            self.start = Some(len);
        }
        len
    }

    /// Account for removing the entry at `index` from a registry of `len`.
    ///
    /// `len` is the length before removal.
    pub fn remove(&mut self, index: usize, len: usize) {
        let Some(start) = self.start else {
            return;
        };
        if index < start {
            self.start = Some(start - 1);
        } else if index == start && index + 1 == len {
            self.start = None;
        }
        // Removing a later end-bound entry, or the first of several, leaves the
        // next end-bound entry at `start` once the tail shifts down.
    }

    /// Whether `index` falls in the end-bound run.
    pub fn is_end_bound(&self, index: usize) -> bool {
        self.start.is_some_and(|start| index >= start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_appends_without_run() {
        let mut tracker = EndBoundTracker::new();
        assert_eq!(tracker.insert_normal(0), 0);
        assert_eq!(tracker.insert_normal(1), 1);
        assert_eq!(tracker.start(), None);
    }

    #[test]
    fn test_first_end_bound_opens_run() {
        let mut tracker = EndBoundTracker::new();
        assert_eq!(tracker.insert_end_bound(2), 2);
        assert_eq!(tracker.start(), Some(2));
        assert_eq!(tracker.insert_end_bound(3), 3);
        assert_eq!(tracker.start(), Some(2));
    }

    #[test]
    fn test_normal_inserts_before_run() {
        let mut tracker = EndBoundTracker::new();
        tracker.insert_end_bound(2);
        assert_eq!(tracker.insert_normal(3), 2);
        assert_eq!(tracker.start(), Some(3));
        assert!(tracker.is_end_bound(3));
        assert!(!tracker.is_end_bound(2));
    }

    #[test]
    fn test_remove_normal_shifts_run() {
        let mut tracker = EndBoundTracker::new();
        tracker.insert_end_bound(3);
        tracker.remove(1, 4);
        assert_eq!(tracker.start(), Some(2));
    }

    #[test]
    fn test_remove_last_end_bound_closes_run() {
        let mut tracker = EndBoundTracker::new();
        tracker.insert_end_bound(2);
        tracker.remove(2, 3);
        assert_eq!(tracker.start(), None);
    }

    #[test]
    fn test_remove_first_of_several_keeps_start() {
        let mut tracker = EndBoundTracker::new();
        tracker.insert_end_bound(1);
        tracker.insert_end_bound(2);
        tracker.remove(1, 3);
        assert_eq!(tracker.start(), Some(1));
        tracker.remove(1, 2);
        assert_eq!(tracker.start(), None);
    }

    #[test]
    fn test_remove_later_end_bound_keeps_start() {
        let mut tracker = EndBoundTracker::new();
        tracker.insert_end_bound(0);
        tracker.insert_end_bound(1);
        tracker.remove(1, 2);
        assert_eq!(tracker.start(), Some(0));
    }

    #[test]
    fn test_remove_without_run_is_noop() {
        let mut tracker = EndBoundTracker::new();
        tracker.remove(0, 1);
        assert_eq!(tracker, EndBoundTracker::new());
    }

    #[test]
    fn test_limit_is_advisory() {
        let mut tracker = EndBoundTracker::new();
        tracker.set_limit(true, 1);
        tracker.insert_end_bound(0);
        tracker.insert_end_bound(1);
        assert_eq!(tracker.limit(), (true, 1));
        assert_eq!(tracker.start(), Some(0));
    }
}
