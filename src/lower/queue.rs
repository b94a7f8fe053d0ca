use std::collections::{HashSet, VecDeque};

use crate::resolve::DefId;

/// Worklist of functions that still need lowering.
///
/// The seen set covers the queue's whole lifetime, not just the pending
/// entries: once a function has been enqueued it can never be enqueued
/// again, no matter how many call sites reference it or whether it has
/// already been drained. That set membership check is what bounds lowering
/// to once per function on diamond and recursive call graphs. Drain order
/// is first-enqueue order.
pub struct FunctionQueue {
    seen: HashSet<DefId>,
    pending: VecDeque<DefId>,
}

impl Default for FunctionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionQueue {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            pending: VecDeque::new(),
        }
    }

    /// Schedules a function for lowering. No-op if it was ever enqueued
    /// before.
    pub fn enqueue(&mut self, def_id: DefId) {
        if self.seen.insert(def_id) {
            self.pending.push_back(def_id);
        }
    }

    pub fn dequeue(&mut self) -> Option<DefId> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/t_queue.rs"]
mod tests;
