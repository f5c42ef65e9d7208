#![forbid(unsafe_code)]

//! Mobile menu toggle and in-page anchor scrolling.

use crate::scroll_tracker::Section;

/// Default space left above an anchor target for the fixed navbar.
pub const DEFAULT_ANCHOR_OFFSET: f64 = 80.0;

/// Open/closed state of the collapsible navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button click. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was followed. Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// What an anchor click should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorScroll {
    /// Suppress the browser's default jump.
    pub prevent_default: bool,
    /// Smooth-scroll destination, if the target exists.
    pub scroll_to: Option<f64>,
}

/// Resolve an in-page anchor `href` against the page sections.
///
/// The bare `"#"` and non-fragment links keep default behavior. A fragment
/// that names no section suppresses the jump and does nothing else.
#[must_use]
pub fn resolve_anchor(href: &str, sections: &[Section], offset: f64) -> AnchorScroll {
    let Some(target) = href.strip_prefix('#').filter(|t| !t.is_empty()) else {
        return AnchorScroll {
            prevent_default: false,
            scroll_to: None,
        };
    };
    AnchorScroll {
        prevent_default: true,
        scroll_to: sections
            .iter()
            .find(|s| s.id == target)
            .map(|s| s.top - offset),
    }
}
