#![forbid(unsafe_code)]

//! Frame-stepped animation primitives.
//!
//! - [`CounterAnimation`]: counts a numeric readout up to its target.
//! - [`Reveal`]: rest/shown style pair for fade-and-slide entry.
//! - [`ProgressFill`]: delayed width fill plus a percentage readout.
//!
//! Animations are pure state; the caller decides when a frame happens.

use core::time::Duration;

/// Nominal frame interval the step size is derived from (~60 fps).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Duration of a statistics counter.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Duration of a progress percentage readout.
pub const PROGRESS_COUNTER_DURATION: Duration = Duration::from_millis(1500);

/// Delay before a progress bar's width transition starts.
pub const PROGRESS_FILL_DELAY: Duration = Duration::from_millis(200);

/// Parse a counter target the way markup attributes are written.
///
/// Leading whitespace and a leading integer are accepted; anything after the
/// digits is ignored (`"85%"` is 85). Returns `None` when there are no
/// leading digits.
#[must_use]
pub fn parse_counter_target(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// One rendered step of a [`CounterAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value to display this frame.
    pub value: u64,
    /// Whether this is the final frame.
    pub done: bool,
}

impl CounterFrame {
    /// Display text with an optional suffix (e.g. `"%"`).
    #[must_use]
    pub fn label(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.value)
    }
}

/// Linear count-up from zero to a target.
///
/// The per-frame step is `target / (duration / frame_interval)`. Each frame
/// adds one step and displays the floor of the running total; once the total
/// reaches the target the display snaps to the target exactly, so float
/// accumulation can never overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    /// Create a counter animation.
    #[must_use]
    pub fn new(target: u64, duration: Duration, frame_interval: Duration) -> Self {
        let frames = if frame_interval.is_zero() {
            0.0
        } else {
            duration.as_nanos() as f64 / frame_interval.as_nanos() as f64
        };
        let step = if frames > 0.0 {
            target as f64 / frames
        } else {
            target as f64
        };
        Self {
            target,
            step,
            current: 0.0,
            done: false,
        }
    }

    /// Counter for a statistics figure.
    #[must_use]
    pub fn counter(target: u64) -> Self {
        Self::new(target, COUNTER_DURATION, DEFAULT_FRAME_INTERVAL)
    }

    /// Counter for a progress percentage.
    #[must_use]
    pub fn progress(target: u64) -> Self {
        Self::new(target, PROGRESS_COUNTER_DURATION, DEFAULT_FRAME_INTERVAL)
    }

    /// Target value.
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// Whether the final frame has been produced.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.done
    }

    /// Produce the next frame. After completion, keeps returning the target.
    pub fn tick(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        self.current += self.step;
        if self.current < self.target as f64 {
            // Floor, clamped below target so a rounding edge never displays it early.
            let value = (self.current.floor() as u64).min(self.target.saturating_sub(1));
            CounterFrame { value, done: false }
        } else {
            self.done = true;
            CounterFrame {
                value: self.target,
                done: true,
            }
        }
    }
}

/// Style snapshot for a reveal-on-scroll element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub opacity: f64,
    pub offset_y: f64,
}

impl Reveal {
    /// Resting style before the element is revealed.
    pub const REST: Self = Self {
        opacity: 0.0,
        offset_y: 30.0,
    };

    /// Final style after the element is revealed.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Transition declared on reveal elements at rest.
    pub const TRANSITION: &'static str = "opacity 0.6s ease-out, transform 0.6s ease-out";

    /// CSS opacity value.
    #[must_use]
    pub fn opacity_css(&self) -> String {
        format_css_number(self.opacity)
    }

    /// CSS transform value.
    #[must_use]
    pub fn transform_css(&self) -> String {
        translate_y_css(self.offset_y)
    }
}

/// `translate3d` with only a vertical component.
#[must_use]
pub fn translate_y_css(offset_y: f64) -> String {
    if offset_y == 0.0 {
        "translate3d(0, 0, 0)".to_owned()
    } else {
        format!("translate3d(0, {}px, 0)", format_css_number(offset_y))
    }
}

/// Render a number without a trailing `.0` for whole values.
#[must_use]
pub fn format_css_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Progress bar fill: a delayed width change paired with a counting label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFill {
    percent: u64,
    counter: CounterAnimation,
}

impl ProgressFill {
    /// Create a fill for `percent`.
    #[must_use]
    pub fn new(percent: u64) -> Self {
        Self {
            percent,
            counter: CounterAnimation::progress(percent),
        }
    }

    /// Target width as a CSS value.
    #[must_use]
    pub fn width_css(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Target percentage.
    #[must_use]
    pub const fn percent(&self) -> u64 {
        self.percent
    }

    /// Percentage readout animation.
    pub fn counter_mut(&mut self) -> &mut CounterAnimation {
        &mut self.counter
    }
}
