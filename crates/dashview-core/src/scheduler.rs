#![forbid(unsafe_code)]

//! Host-driven timer and animation-frame scheduling.
//!
//! The browser gives page code two suspension points: timers
//! (`setTimeout`) and frame callbacks (`requestAnimationFrame`). This module
//! models both without threads or wall-clock reads. The host owns the event
//! loop and calls into the scheduler:
//!
//! 1. [`Scheduler::advance`] moves the [`DeterministicClock`] forward and
//!    returns every timer task whose deadline has passed.
//! 2. [`Scheduler::begin_frame`] returns the frame tasks that were queued
//!    before the frame started.
//!
//! # Invariants
//!
//! - Timer tasks are returned in deadline order; ties resolve by insertion.
//! - A cleared timer never fires. Ids are never reused.
//! - Frame tasks requested while a frame's tasks are being handled run on the
//!   *next* frame, never the current one.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use dashview_core::scheduler::Scheduler;
//!
//! let mut sched = Scheduler::new();
//! sched.set_timeout(Duration::from_millis(300), "fade");
//! sched.request_frame("paint");
//!
//! assert_eq!(sched.begin_frame(), vec!["paint"]);
//! assert!(sched.advance(Duration::from_millis(299)).is_empty());
//! assert_eq!(sched.advance(Duration::from_millis(1)), vec!["fade"]);
//! ```

use core::time::Duration;
use std::collections::BTreeMap;

/// Handle for a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Handle for a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Set current monotonic time. Moving backwards is ignored.
    pub fn set(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

/// Timer and frame queue for one page.
///
/// `T` is the task payload handed back to the caller when the timer or
/// frame comes due; the scheduler never interprets it.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    clock: DeterministicClock,
    next_id: u64,
    /// Keyed by `(deadline, id)` so iteration order is firing order.
    timers: BTreeMap<(Duration, u64), T>,
    deadlines: BTreeMap<u64, Duration>,
    frames: Vec<(FrameId, T)>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: DeterministicClock::new(),
            next_id: 0,
            timers: BTreeMap::new(),
            deadlines: BTreeMap::new(),
            frames: Vec::new(),
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Schedule `task` to fire once `delay` has elapsed.
    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TimerId {
        self.set_timeout_with(delay, |_| task)
    }

    /// Schedule a task that needs to know its own timer id.
    pub fn set_timeout_with(
        &mut self,
        delay: Duration,
        task: impl FnOnce(TimerId) -> T,
    ) -> TimerId {
        let id = self.allocate_id();
        let deadline = self.clock.now().saturating_add(delay);
        self.timers.insert((deadline, id), task(TimerId(id)));
        self.deadlines.insert(id, deadline);
        TimerId(id)
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was cleared.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id.0) {
            Some(deadline) => self.timers.remove(&(deadline, id.0)).is_some(),
            None => false,
        }
    }

    /// Whether `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id.0)
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Queue `task` for the next animation frame.
    pub fn request_frame(&mut self, task: T) -> FrameId {
        let id = FrameId(self.allocate_id());
        self.frames.push((id, task));
        id
    }

    /// Drop a queued frame request. Returns `false` if it is not queued.
    pub fn cancel_frame(&mut self, id: FrameId) -> bool {
        let before = self.frames.len();
        self.frames.retain(|(frame, _)| *frame != id);
        self.frames.len() != before
    }

    /// Number of frame requests waiting for the next frame.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Start a frame: take every task queued so far, in request order.
    ///
    /// Anything requested while the caller handles these tasks is deferred
    /// to the following frame.
    pub fn begin_frame(&mut self) -> Vec<T> {
        std::mem::take(&mut self.frames)
            .into_iter()
            .map(|(_, task)| task)
            .collect()
    }

    /// Advance the clock by `dt` and return the timers that came due.
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        self.clock.advance(dt);
        self.drain_due()
    }

    /// Jump the clock to `now` (if later) and return the timers that came due.
    pub fn advance_to(&mut self, now: Duration) -> Vec<T> {
        self.clock.set(now);
        self.drain_due()
    }

    fn drain_due(&mut self) -> Vec<T> {
        let now = self.clock.now();
        let mut due = Vec::new();
        while let Some(entry) = self.timers.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((_, id), task) = entry.remove_entry();
            self.deadlines.remove(&id);
            due.push(task);
        }
        due
    }

    /// Time until the earliest pending timer, if any.
    #[must_use]
    pub fn next_deadline_in(&self) -> Option<Duration> {
        self.timers
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut sched = Scheduler::new();
        sched.set_timeout(ms(300), 'c');
        sched.set_timeout(ms(100), 'a');
        sched.set_timeout(ms(200), 'b');
        assert_eq!(sched.advance(ms(500)), vec!['a', 'b', 'c']);
        assert_eq!(sched.pending_timers(), 0);
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let mut sched = Scheduler::new();
        sched.set_timeout(ms(10), 1);
        sched.set_timeout(ms(10), 2);
        sched.set_timeout(ms(10), 3);
        assert_eq!(sched.advance(ms(10)), vec![1, 2, 3]);
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut sched = Scheduler::new();
        let id = sched.set_timeout(ms(50), "gone");
        assert!(sched.is_pending(id));
        assert!(sched.clear_timeout(id));
        assert!(!sched.is_pending(id));
        assert!(!sched.clear_timeout(id));
        assert!(sched.advance(ms(100)).is_empty());
    }

    #[test]
    fn deadline_is_relative_to_schedule_time() {
        let mut sched = Scheduler::new();
        sched.advance(ms(1000));
        sched.set_timeout(ms(300), ());
        assert_eq!(sched.next_deadline_in(), Some(ms(300)));
        assert!(sched.advance(ms(299)).is_empty());
        assert_eq!(sched.advance(ms(1)).len(), 1);
    }

    #[test]
    fn frame_requests_made_during_a_frame_wait_for_the_next() {
        let mut sched = Scheduler::new();
        sched.request_frame("first");
        let tasks = sched.begin_frame();
        assert_eq!(tasks, vec!["first"]);
        // Handling "first" queues follow-up work.
        sched.request_frame("second");
        assert_eq!(sched.pending_frames(), 1);
        assert_eq!(sched.begin_frame(), vec!["second"]);
        assert!(sched.begin_frame().is_empty());
    }

    #[test]
    fn cancelled_frame_is_dropped() {
        let mut sched = Scheduler::new();
        let keep = sched.request_frame(1);
        let drop = sched.request_frame(2);
        assert!(sched.cancel_frame(drop));
        assert!(!sched.cancel_frame(drop));
        let _ = keep;
        assert_eq!(sched.begin_frame(), vec![1]);
    }

    #[test]
    fn advance_to_never_moves_backwards() {
        let mut sched: Scheduler<()> = Scheduler::new();
        sched.advance_to(ms(500));
        sched.advance_to(ms(100));
        assert_eq!(sched.now(), ms(500));
    }
}
