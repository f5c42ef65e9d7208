#![forbid(unsafe_code)]

//! One-shot viewport visibility observation.
//!
//! [`OneShotObserver`] mirrors an intersection observer that unobserves
//! each target the first time it becomes visible enough. The host reports
//! visible fractions (or raw geometry via [`visible_fraction`]); the
//! observer answers whether the element's one-time animation should start.
//!
//! # Invariants
//!
//! 1. [`OneShotObserver::report`] returns `true` at most once per key for
//!    the lifetime of the observation.
//! 2. After firing, the key is no longer observed; scrolling it out and back
//!    in is a no-op.
//! 3. Reports for keys that were never observed are ignored.

use std::collections::HashSet;
use std::hash::Hash;

/// Threshold and root margin for an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionConfig {
    /// Minimum visible fraction (0.0–1.0) that counts as intersecting.
    pub threshold: f64,
    /// Signed adjustment of the viewport's bottom edge. Negative shrinks it.
    ///
    /// [`OneShotObserver`] only compares reported fractions with the
    /// threshold; the margin applies where the fraction is computed, either
    /// in the host's observer or through [`visible_fraction`].
    pub root_margin_bottom: f64,
}

impl IntersectionConfig {
    /// Half the element must be on screen; used by counters and progress bars.
    pub const HALF_VISIBLE: Self = Self {
        threshold: 0.5,
        root_margin_bottom: 0.0,
    };

    /// Reveal-on-scroll: a tenth visible, 50 units above the viewport bottom.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin_bottom: -50.0,
    };

    /// Create a config with the given threshold and no margin.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin_bottom: 0.0,
        }
    }

    /// Set the bottom root margin.
    #[must_use]
    pub fn with_root_margin_bottom(mut self, margin: f64) -> Self {
        self.root_margin_bottom = margin;
        self
    }
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self::HALF_VISIBLE
    }
}

/// Fraction of an element's height inside the (margin-adjusted) viewport.
///
/// Zero-height elements count as fully visible when their top edge lies
/// inside the viewport.
#[must_use]
pub fn visible_fraction(
    element_top: f64,
    element_height: f64,
    viewport_top: f64,
    viewport_height: f64,
    root_margin_bottom: f64,
) -> f64 {
    let view_bottom = viewport_top + (viewport_height + root_margin_bottom).max(0.0);
    if element_height <= 0.0 {
        return if element_top >= viewport_top && element_top <= view_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap_top = element_top.max(viewport_top);
    let overlap_bottom = (element_top + element_height).min(view_bottom);
    ((overlap_bottom - overlap_top).max(0.0) / element_height).clamp(0.0, 1.0)
}

/// Fires once per observed key when its visibility crosses the threshold.
#[derive(Debug, Clone)]
pub struct OneShotObserver<K> {
    config: IntersectionConfig,
    observed: HashSet<K>,
    fired: u64,
}

impl<K: Eq + Hash> OneShotObserver<K> {
    /// Create an observer with no targets.
    #[must_use]
    pub fn new(config: IntersectionConfig) -> Self {
        Self {
            config,
            observed: HashSet::new(),
            fired: 0,
        }
    }

    /// Observer configuration.
    #[must_use]
    pub const fn config(&self) -> &IntersectionConfig {
        &self.config
    }

    /// Start observing `key`. Returns `false` if it was already observed.
    pub fn observe(&mut self, key: K) -> bool {
        self.observed.insert(key)
    }

    /// Stop observing `key` without firing.
    pub fn unobserve(&mut self, key: &K) -> bool {
        self.observed.remove(key)
    }

    /// Whether `key` is still waiting to fire.
    #[must_use]
    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains(key)
    }

    /// Number of keys still observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Whether nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Total one-shot firings so far.
    #[must_use]
    pub const fn fired_count(&self) -> u64 {
        self.fired
    }

    /// Report the visible fraction of `key`.
    ///
    /// Returns `true` exactly when this report triggers the one-shot
    /// callback; the key is unobserved in the same step.
    pub fn report(&mut self, key: &K, fraction: f64) -> bool {
        let intersecting = fraction > 0.0 && fraction >= self.config.threshold;
        if intersecting && self.observed.remove(key) {
            self.fired = self.fired.saturating_add(1);
            return true;
        }
        false
    }
}
