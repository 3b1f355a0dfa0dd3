//! Request-generation counter for overlapping fetches.
//!
//! Each outbound request takes a [`RequestTicket`]. When the response lands,
//! it is applied only if no newer ticket was issued in the meantime, so a
//! slow response cannot overwrite state from a faster, newer one.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Shared generation counter; clones observe the same sequence.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before it.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
