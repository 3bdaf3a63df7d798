// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A clockless debounce for coalescing bursts of saves.

/// Debounce state over a caller-supplied millisecond clock.
///
/// Every [`mark`](Self::mark) pushes the deadline out by the full delay,
/// so a burst of changes produces one save after the burst ends. The
/// struct never reads a clock itself; hosts feed it the same timestamps
/// they stamp envelopes with, which also makes tests trivial.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Debounce {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// A debounce that fires `delay_ms` after the last mark.
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Notes a change at `now_ms`, rescheduling the pending fire.
    pub fn mark(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Returns `true` once the delay has elapsed since the last mark,
    /// then disarms until the next mark.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a fire is scheduled.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any scheduled fire without running it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
