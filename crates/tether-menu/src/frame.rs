//! Animation-frame scheduling for deferred content measurement.

use std::collections::VecDeque;

/// Handle of a scheduled frame callback, like a `requestAnimationFrame` id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// FIFO of measurements waiting for the next frame.
///
/// Requests are never cancelled; each one runs when the frame fires.
#[derive(Debug, Default)]
pub(crate) struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameId>,
}

impl FrameQueue {
    pub(crate) fn request(&mut self) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.pending.push_back(id);
        id
    }

    /// Take every request queued so far. Requests made while the returned
    /// batch runs belong to the following frame.
    pub(crate) fn take_batch(&mut self) -> Vec<FrameId> {
        self.pending.drain(..).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}
