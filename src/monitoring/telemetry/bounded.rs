//! Bounded collection utilities for telemetry

use std::collections::VecDeque;

/// Default number of events retained by a recorder
pub(super) const DEFAULT_CAPACITY: usize = 1_000;

/// Helper trait for bounded VecDeque operations
pub(super) trait BoundedPush<T> {
    fn push_bounded(&mut self, value: T, max_size: usize);
}

impl<T> BoundedPush<T> for VecDeque<T> {
    /// Push a value, evicting from the front until the length fits (O(1) amortized)
    #[inline]
    fn push_bounded(&mut self, value: T, max_size: usize) {
        while self.len() >= max_size.max(1) {
            self.pop_front();
        }
        self.push_back(value);
    }
}
