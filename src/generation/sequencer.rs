/*!
 * Request sequencing for overlapping generation calls.
 *
 * Every request gets an id larger than all ids issued before it. Only the
 * most recently issued id may update shared state.
 */

use std::sync::atomic::{AtomicU64, Ordering};

/// Issues monotonically increasing request ids
#[derive(Debug, Default)]
pub struct RequestSequencer {
    last_issued: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id. The first id is 1.
    pub fn next_id(&self) -> u64 {
        self.last_issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Most recently issued id, 0 before the first request.
    pub fn latest(&self) -> u64 {
        self.last_issued.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.latest()
    }
}
