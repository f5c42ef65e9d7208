#![forbid(unsafe_code)]

//! One-evaluation-per-frame coalescing for high-frequency input.
//!
//! Scroll and resize handlers fire far more often than the display
//! refreshes. [`FrameCoalescer`] keeps a single "frame already queued" flag:
//! the first push in a burst requests a frame, later pushes only replace
//! the stored value. When the frame runs, [`FrameCoalescer::take`] hands
//! back the latest value and re-arms the flag.
//!
//! # Invariants
//!
//! - At most one frame request is outstanding per coalescer.
//! - Latest wins: the value observed at frame time is the last one pushed.

use crate::scheduler::Scheduler;

/// Latest-wins, frame-aligned coalescer.
#[derive(Debug, Clone, Default)]
pub struct FrameCoalescer<V> {
    latest: Option<V>,
    queued: bool,
    coalesced: u64,
}

impl<V> FrameCoalescer<V> {
    /// Create an idle coalescer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: None,
            queued: false,
            coalesced: 0,
        }
    }

    /// Record `value`, queueing `task` for the next frame if nothing is queued.
    ///
    /// Returns `true` when this push requested a frame.
    pub fn push<T>(&mut self, sched: &mut Scheduler<T>, value: V, task: T) -> bool {
        self.latest = Some(value);
        if self.queued {
            self.coalesced = self.coalesced.saturating_add(1);
            return false;
        }
        sched.request_frame(task);
        self.queued = true;
        true
    }

    /// Frame callback side: take the latest value and clear the queued flag.
    pub fn take(&mut self) -> Option<V> {
        self.queued = false;
        self.latest.take()
    }

    /// Whether a frame is queued for this coalescer.
    #[must_use]
    pub const fn is_queued(&self) -> bool {
        self.queued
    }

    /// Number of pushes absorbed without a new frame request.
    #[must_use]
    pub const fn coalesced(&self) -> u64 {
        self.coalesced
    }
}
