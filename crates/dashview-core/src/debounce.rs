#![forbid(unsafe_code)]

//! Trailing-edge debouncing on top of [`Scheduler`].
//!
//! Each call replaces the pending timer: only the last call inside a quiet
//! window of `delay` survives, and it carries the arguments of that call.
//! A [`Debouncer`] owns at most one outstanding timer at any moment.
//!
//! The debouncer does not run the action itself. The scheduler hands the
//! timer task back to the caller, who passes the [`TimerId`] to
//! [`Debouncer::fire`] to recover the latest arguments. Stale ids (timers
//! that were superseded) yield `None`.

use core::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

/// Collapses bursts of calls into a single trailing invocation.
#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    delay: Duration,
    pending: Option<(TimerId, A)>,
}

impl<A> Debouncer<A> {
    /// Create a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet window length.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a call with `args`.
    ///
    /// Clears the previous timer (if any) and schedules `task` after the
    /// quiet window. `task` should carry the returned id back to
    /// [`fire`](Self::fire) once the scheduler yields it.
    pub fn call<T>(
        &mut self,
        sched: &mut Scheduler<T>,
        args: A,
        task: impl FnOnce(TimerId) -> T,
    ) -> TimerId {
        self.cancel(sched);
        let id = sched.set_timeout_with(self.delay, task);
        self.pending = Some((id, args));
        id
    }

    /// Take the arguments for timer `id` if it is the live one.
    pub fn fire(&mut self, id: TimerId) -> Option<A> {
        match self.pending.take() {
            Some((live, args)) if live == id => Some(args),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop the pending call, if any.
    pub fn cancel<T>(&mut self, sched: &mut Scheduler<T>) {
        if let Some((id, _)) = self.pending.take() {
            sched.clear_timeout(id);
        }
    }

    /// Whether a trailing call is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
