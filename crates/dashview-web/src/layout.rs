#![forbid(unsafe_code)]

//! The DOM contract the page consumes.
//!
//! The host scans the document once and describes what it found in a
//! [`PageLayout`]: which singleton elements exist ([`Elements`]) and the
//! keyed collections (sections, counters, gallery items, ...). Missing
//! optional elements turn their features into no-ops; missing required ones
//! fail [`PageLayout::validate`].

use bitflags::bitflags;

use dashview_widgets::accordion::AccordionGroup;
use dashview_widgets::document::PageLocation;
use dashview_widgets::modal::OverlayElement;
use dashview_widgets::scroll_tracker::Section;
use dashview_widgets::ContentItem;

use crate::PageError;

bitflags! {
    /// Singleton elements present in the document.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Elements: u32 {
        const NAVBAR           = 1 << 0;
        const MENU_TOGGLE      = 1 << 1;
        const NAV_LINKS        = 1 << 2;
        const LOADING_SCREEN   = 1 << 3;
        const MODAL            = 1 << 4;
        const MODAL_IMAGE      = 1 << 5;
        const MODAL_PDF        = 1 << 6;
        const MODAL_OFFICE     = 1 << 7;
        const MODAL_CLOSE      = 1 << 8;
        const HERO             = 1 << 9;
        const SEARCH_BOX       = 1 << 10;
        const ACCORDION_VIEW   = 1 << 11;
        const GRID_VIEW        = 1 << 12;
        const GRID_TABS        = 1 << 13;
        const PROJECT_MODAL    = 1 << 14;
        const INSPECTION_MODAL = 1 << 15;
        const MONTHLY_POPUP    = 1 << 16;
        /// The charting library script loaded.
        const CHART_LIBRARY    = 1 << 17;

        /// Elements the page touches without checking.
        const REQUIRED = Self::NAVBAR.bits()
            | Self::MENU_TOGGLE.bits()
            | Self::NAV_LINKS.bits()
            | Self::LOADING_SCREEN.bits()
            | Self::MODAL.bits()
            | Self::MODAL_IMAGE.bits()
            | Self::MODAL_PDF.bits()
            | Self::MODAL_OFFICE.bits()
            | Self::MODAL_CLOSE.bits();
    }
}

impl Elements {
    /// The flag for an overlay root.
    #[must_use]
    pub const fn overlay(element: OverlayElement) -> Self {
        match element {
            OverlayElement::DocumentModal => Self::MODAL,
            OverlayElement::ProjectModal => Self::PROJECT_MODAL,
            OverlayElement::InspectionModal => Self::INSPECTION_MODAL,
            OverlayElement::MonthlyPopup => Self::MONTHLY_POPUP,
        }
    }
}

impl Default for Elements {
    fn default() -> Self {
        Self::REQUIRED
    }
}

/// An animated statistic; `target` is the raw attribute text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub key: String,
    pub target: String,
}

impl CounterSpec {
    pub fn new(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: target.into(),
        }
    }
}

/// A progress bar; `percent` is the raw `data-progress` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSpec {
    pub key: String,
    pub percent: String,
}

impl ProgressSpec {
    pub fn new(key: impl Into<String>, percent: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            percent: percent.into(),
        }
    }
}

/// Everything the page reads from the document at startup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub location: PageLocation,
    pub elements: Elements,
    /// Sections in document order with their offsets from the page top.
    pub sections: Vec<Section>,
    pub counters: Vec<CounterSpec>,
    pub progress_bars: Vec<ProgressSpec>,
    /// Keys of fade/slide-in elements.
    pub reveals: Vec<String>,
    /// Category tags of the grid tab strip. The `all` tab starts active
    /// regardless of order.
    pub gallery_tabs: Vec<String>,
    pub grid_items: Vec<ContentItem>,
    pub accordion_groups: Vec<AccordionGroup>,
    /// Ids of chart canvases present.
    pub chart_canvases: Vec<String>,
}

impl PageLayout {
    #[must_use]
    pub fn with_elements(mut self, elements: Elements) -> Self {
        self.elements |= elements;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: PageLocation) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn with_counters(mut self, counters: Vec<CounterSpec>) -> Self {
        self.counters = counters;
        self
    }

    #[must_use]
    pub fn with_progress_bars(mut self, bars: Vec<ProgressSpec>) -> Self {
        self.progress_bars = bars;
        self
    }

    #[must_use]
    pub fn with_reveals(mut self, keys: Vec<String>) -> Self {
        self.reveals = keys;
        self
    }

    #[must_use]
    pub fn with_gallery(mut self, tabs: Vec<String>, items: Vec<ContentItem>) -> Self {
        self.gallery_tabs = tabs;
        self.grid_items = items;
        self
    }

    #[must_use]
    pub fn with_accordion(mut self, groups: Vec<AccordionGroup>) -> Self {
        self.accordion_groups = groups;
        self
    }

    #[must_use]
    pub fn with_chart_canvases(mut self, ids: Vec<String>) -> Self {
        self.chart_canvases = ids;
        self
    }

    /// Whether every flag in `elements` is present.
    #[must_use]
    pub fn has(&self, elements: Elements) -> bool {
        self.elements.contains(elements)
    }

    /// Fail on the first required element that is missing.
    pub fn validate(&self) -> Result<(), PageError> {
        match (Elements::REQUIRED - self.elements).iter_names().next() {
            Some((name, _)) => Err(PageError::MissingElement(name)),
            None => Ok(()),
        }
    }
}
