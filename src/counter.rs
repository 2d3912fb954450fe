/*
 * ==========================================================================
 * FNTOUR - A guided tour of function contracts
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the FNTOUR project.
 *
 * FNTOUR is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::ops::RangeInclusive;

use tracing::warn;

/// A counter that only moves forward.
///
/// Created at `0`. The value never decreases, and every value it passes
/// through is reported by the call that passed it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Steps forward by one and returns the new value.
    ///
    /// At `u64::MAX` the counter stays put and keeps returning `u64::MAX`.
    pub fn advance(&mut self) -> u64 {
        match self.value.checked_add(1) {
            Some(next) => self.value = next,
            None => warn!(current = self.value, "counter is at its limit"),
        }
        self.value
    }

    /// Moves to `target`, returning every value from the current one up to
    /// and including `target`.
    ///
    /// The sequence is produced lazily, so any `target` is accepted.
    /// A `target` below the current value is refused: the counter is left
    /// unchanged and the returned sequence is empty.
    pub fn advance_to(&mut self, target: u64) -> RangeInclusive<u64> {
        if target < self.value {
            warn!(current = self.value, target, "counter refused to move backwards");
            // An exhausted range yields nothing.
            let mut empty = target..=target;
            empty.next();
            return empty;
        }

        let steps = self.value..=target;
        self.value = target;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::new().value(), 0);
    }

    #[test]
    fn advance_then_advance_to() {
        let mut counter = Counter::new();
        assert_eq!(counter.advance(), 1);
        let steps: Vec<u64> = counter.advance_to(20).collect();
        assert_eq!(steps, (1..=20).collect::<Vec<u64>>());
        assert_eq!(counter.value(), 20);
    }

    #[test]
    fn advance_to_current_reports_it_once() {
        let mut counter = Counter::new();
        let _ = counter.advance_to(5);
        assert_eq!(counter.advance_to(5).collect::<Vec<u64>>(), vec![5]);
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn never_moves_backwards() {
        let mut counter = Counter::new();
        let _ = counter.advance_to(10);
        assert_eq!(counter.advance_to(3).next(), None);
        assert_eq!(counter.value(), 10);
        assert_eq!(counter.advance(), 11);
    }

    #[test]
    fn advance_to_the_limit_is_lazy() {
        let mut counter = Counter::new();
        let mut steps = counter.advance_to(u64::MAX);
        assert_eq!(counter.value(), u64::MAX);
        assert_eq!(steps.next(), Some(0));
        assert_eq!(steps.next_back(), Some(u64::MAX));
    }

    #[test]
    fn advance_saturates_at_the_limit() {
        let mut counter = Counter::new();
        let _ = counter.advance_to(u64::MAX - 1);
        assert_eq!(counter.advance(), u64::MAX);
        assert_eq!(counter.advance(), u64::MAX);
        assert_eq!(counter.value(), u64::MAX);
    }
}
