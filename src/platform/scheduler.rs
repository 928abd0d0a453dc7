//! Frame scheduling
//!
//! The game asks the host for "the next frame" and gets back a handle. The
//! host later delivers that handle to [`crate::Game::frame`]. Cancelling is
//! explicit: a cancelled handle must never be delivered, and the game also
//! ignores any handle that is not the one it is waiting for.

use std::collections::VecDeque;

/// Identifies one requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host-provided "call me next frame" primitive
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven by hand: frames fire when the host pops them
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queue: VecDeque<FrameHandle>,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest pending frame, if any
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        self.queue.pop_front()
    }

    /// Frames requested and not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.queue.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queue.len();
        self.queue.retain(|h| *h != handle);
        if self.queue.len() != before {
            self.cancelled += 1;
        }
    }
}
