#![forbid(unsafe_code)]

//! Expandable description panels under each objective card.
//!
//! Expanding a panel scrolls it into view once its opening transition has
//! started; collapsing scrolls back to the expand button after the panel has
//! shrunk.

use core::time::Duration;
use std::collections::HashSet;

/// Delay before scrolling an expanded panel into view.
pub const DEFAULT_EXPAND_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Delay before scrolling back to the button of a collapsed panel.
pub const DEFAULT_COLLAPSE_SCROLL_DELAY: Duration = Duration::from_millis(300);

/// Which element a follow-up scroll targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Content,
    Button,
}

/// Vertical alignment for `scrollIntoView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
}

impl ScrollBlock {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

/// Outcome of toggling one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionToggle {
    pub id: String,
    pub expanded: bool,
    pub scroll_target: ScrollTarget,
    pub block: ScrollBlock,
    pub scroll_delay: Duration,
}

/// Expanded panels by objective id.
#[derive(Debug, Clone)]
pub struct DescriptionPanels {
    expanded: HashSet<String>,
    expand_delay: Duration,
    collapse_delay: Duration,
}

impl Default for DescriptionPanels {
    fn default() -> Self {
        Self::new(DEFAULT_EXPAND_SCROLL_DELAY, DEFAULT_COLLAPSE_SCROLL_DELAY)
    }
}

impl DescriptionPanels {
    #[must_use]
    pub fn new(expand_delay: Duration, collapse_delay: Duration) -> Self {
        Self {
            expanded: HashSet::new(),
            expand_delay,
            collapse_delay,
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip panel `id`.
    pub fn toggle(&mut self, id: &str) -> DescriptionToggle {
        if self.expanded.remove(id) {
            DescriptionToggle {
                id: id.to_owned(),
                expanded: false,
                scroll_target: ScrollTarget::Button,
                block: ScrollBlock::Center,
                scroll_delay: self.collapse_delay,
            }
        } else {
            self.expanded.insert(id.to_owned());
            DescriptionToggle {
                id: id.to_owned(),
                expanded: true,
                scroll_target: ScrollTarget::Content,
                block: ScrollBlock::Start,
                scroll_delay: self.expand_delay,
            }
        }
    }
}
