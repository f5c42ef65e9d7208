#![forbid(unsafe_code)]

//! Scroll-derived navigation state.
//!
//! Scroll events are coalesced to one evaluation per animation frame. Each
//! evaluation derives:
//!
//! - **Navbar visibility**: past `hide_threshold`, scrolling down hides the
//!   navbar and scrolling up shows it. At or above the threshold the flag is
//!   left alone. The very first evaluation only records a baseline offset.
//! - **Active section**: the last section (document order) whose top is
//!   within `activation_offset` of having been scrolled past.
//! - **Parallax**: the hero's vertical offset, `offset * parallax_factor`.

use dashview_core::frame_coalescer::FrameCoalescer;
use dashview_core::scheduler::Scheduler;

/// A page section with a navigation anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Thresholds for [`ScrollTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Offset below which the navbar is never hidden or shown by scrolling.
    pub hide_threshold: f64,
    /// How far ahead of a section's top it becomes the active one.
    pub activation_offset: f64,
    /// Hero translation per unit of scroll.
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            hide_threshold: 100.0,
            activation_offset: 200.0,
            parallax_factor: 0.5,
        }
    }
}

/// Result of one frame's evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub offset: f64,
    pub navbar_hidden: bool,
    pub active_section: Option<String>,
    pub parallax_offset: f64,
}

/// Pick the active section for `offset`.
#[must_use]
pub fn active_section<'a>(
    sections: &'a [Section],
    offset: f64,
    activation_offset: f64,
) -> Option<&'a Section> {
    sections
        .iter()
        .rev()
        .find(|s| offset >= s.top - activation_offset)
}

/// Frame-coalesced scroll state.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    config: ScrollConfig,
    pending: FrameCoalescer<f64>,
    last_offset: Option<f64>,
    navbar_hidden: bool,
    active_section: Option<String>,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[must_use]
    pub const fn navbar_hidden(&self) -> bool {
        self.navbar_hidden
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    #[must_use]
    pub const fn last_offset(&self) -> Option<f64> {
        self.last_offset
    }

    /// Scroll event: remember the offset and queue `task` unless a frame is
    /// already queued. Returns whether a frame was requested.
    pub fn on_scroll<T>(&mut self, sched: &mut Scheduler<T>, offset: f64, task: T) -> bool {
        self.pending.push(sched, offset, task)
    }

    /// Frame callback: evaluate the latest offset, if one is pending.
    pub fn on_frame(&mut self, sections: &[Section]) -> Option<ScrollUpdate> {
        let offset = self.pending.take()?;
        Some(self.evaluate(offset, sections))
    }

    /// Evaluate `offset` immediately, bypassing coalescing.
    pub fn evaluate(&mut self, offset: f64, sections: &[Section]) -> ScrollUpdate {
        if let Some(last) = self.last_offset
            && offset > self.config.hide_threshold
        {
            self.navbar_hidden = offset > last;
        }
        self.last_offset = Some(offset);
        self.active_section = active_section(sections, offset, self.config.activation_offset)
            .map(|s| s.id.clone());

        dashview_core::trace!(
            offset,
            navbar_hidden = self.navbar_hidden,
            "scroll evaluated"
        );
        ScrollUpdate {
            offset,
            navbar_hidden: self.navbar_hidden,
            active_section: self.active_section.clone(),
            parallax_offset: offset * self.config.parallax_factor,
        }
    }
}
