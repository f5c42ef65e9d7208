#![forbid(unsafe_code)]

//! Tab-based category filter for the gallery grid.
//!
//! Selecting a tab partitions the items into matching (tag equals the
//! selection, or the selection is [`ALL_CATEGORY`]) and non-matching. The
//! visual change is sequenced over frames and a timer:
//!
//! ```text
//!  tab click ──► frame N: matching      → Display   (back into layout)
//!                         non-matching  → FadeOut   + removal timer
//!                frame N+1: matching    → FadeIn    (opacity 1, no offset)
//!                +removal_delay: leaving → Remove   (display: none)
//! ```
//!
//! Display and opacity must not change in the same frame or the browser
//! skips the transition; the fade-in is therefore requested from inside the
//! filter frame, which the scheduler defers to the following frame.
//!
//! # Invariants
//!
//! - Re-showing an item cancels its pending removal timer, so after the
//!   timers settle the displayed set equals the selected partition.
//! - Late fade-in or removal callbacks for an item whose lifecycle moved on
//!   are ignored.

use core::time::Duration;
use std::collections::HashMap;

use dashview_core::scheduler::{Scheduler, TimerId};

use crate::item::{ContentItem, ItemId};

/// Pseudo-category that matches every item.
pub const ALL_CATEGORY: &str = "all";

/// Default delay between fading an item out and removing it from layout.
pub const DEFAULT_REMOVAL_DELAY: Duration = Duration::from_millis(300);

/// Whether `item` belongs to the partition selected by `tag`.
#[must_use]
pub fn matches_category(item: &ContentItem, tag: &str) -> bool {
    tag == ALL_CATEGORY || item.category == tag
}

/// Lifecycle of one grid item across a filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// In layout, fully opaque.
    Shown,
    /// Back in layout, waiting for the next frame to fade in.
    Entering,
    /// Fading out, waiting for the removal timer.
    Leaving,
    /// Out of layout.
    Removed,
}

impl Presence {
    /// Whether the item counts as visible.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Shown | Self::Entering)
    }
}

/// Style change the page must apply to an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEffect {
    /// Restore to layout (`display: block`).
    Display(ItemId),
    /// Opacity 1, zero offset.
    FadeIn(ItemId),
    /// Opacity 0, displaced offset.
    FadeOut(ItemId),
    /// Remove from layout (`display: none`).
    Remove(ItemId),
}

#[derive(Debug, Clone)]
struct GridEntry {
    item: ContentItem,
    presence: Presence,
    removal: Option<TimerId>,
}

/// Active tab plus per-item presence for the grid.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    tabs: Vec<String>,
    active: String,
    entries: Vec<GridEntry>,
    index: HashMap<ItemId, usize>,
    removal_delay: Duration,
}

impl CategoryFilter {
    /// Build a filter with every item shown and the "all" tab active.
    #[must_use]
    pub fn new(tabs: Vec<String>, items: Vec<ContentItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();
        let entries = items
            .into_iter()
            .map(|item| GridEntry {
                item,
                presence: Presence::Shown,
                removal: None,
            })
            .collect();
        Self {
            tabs,
            active: ALL_CATEGORY.to_owned(),
            entries,
            index,
            removal_delay: DEFAULT_REMOVAL_DELAY,
        }
    }

    /// Override the fade-out removal delay.
    #[must_use]
    pub fn with_removal_delay(mut self, delay: Duration) -> Self {
        self.removal_delay = delay;
        self
    }

    /// Currently selected tab.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Tabs in document order.
    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    /// Presence of an item.
    #[must_use]
    pub fn presence(&self, id: &ItemId) -> Option<Presence> {
        self.index.get(id).map(|&i| self.entries[i].presence)
    }

    /// Ids of items currently counted as visible, in document order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.entries
            .iter()
            .filter(|e| e.presence.is_visible())
            .map(|e| &e.item.id)
    }

    /// Tab click: mark `tag` active and report each tab's active flag.
    ///
    /// The caller then requests a frame that runs [`apply`](Self::apply)
    /// with the same tag.
    pub fn select(&mut self, tag: &str) -> Vec<(String, bool)> {
        self.active = tag.to_owned();
        self.tabs
            .iter()
            .map(|t| (t.clone(), t == tag))
            .collect()
    }

    /// Filter frame: start every item's transition toward the `tag` partition.
    ///
    /// Entering items get a fade-in frame requested through `fade_task`;
    /// leaving items get a removal timer through `removal_task`.
    pub fn apply<T>(
        &mut self,
        tag: &str,
        sched: &mut Scheduler<T>,
        mut fade_task: impl FnMut(&ItemId) -> T,
        mut removal_task: impl FnMut(&ItemId) -> T,
    ) -> Vec<FilterEffect> {
        let mut effects = Vec::new();
        for entry in &mut self.entries {
            let id = &entry.item.id;
            if matches_category(&entry.item, tag) {
                if let Some(timer) = entry.removal.take() {
                    sched.clear_timeout(timer);
                }
                if entry.presence != Presence::Shown {
                    entry.presence = Presence::Entering;
                    effects.push(FilterEffect::Display(id.clone()));
                    sched.request_frame(fade_task(id));
                }
            } else if entry.presence.is_visible() {
                entry.presence = Presence::Leaving;
                effects.push(FilterEffect::FadeOut(id.clone()));
                entry.removal = Some(sched.set_timeout(self.removal_delay, removal_task(id)));
            }
        }
        dashview_core::debug!(tag, changes = effects.len(), "category filter applied");
        effects
    }

    /// Fade-in frame for one item.
    pub fn fade_in(&mut self, id: &ItemId) -> Option<FilterEffect> {
        let entry = &mut self.entries[*self.index.get(id)?];
        if entry.presence != Presence::Entering {
            return None;
        }
        entry.presence = Presence::Shown;
        Some(FilterEffect::FadeIn(id.clone()))
    }

    /// Removal timer for one item.
    pub fn remove(&mut self, id: &ItemId) -> Option<FilterEffect> {
        let entry = &mut self.entries[*self.index.get(id)?];
        if entry.presence != Presence::Leaving {
            return None;
        }
        entry.presence = Presence::Removed;
        entry.removal = None;
        Some(FilterEffect::Remove(id.clone()))
    }
}
