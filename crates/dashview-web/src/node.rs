#![forbid(unsafe_code)]

//! Typed addresses for the DOM elements the page reads and writes.
//!
//! Every [`Node`] renders (via `Display`) to the CSS selector the host glue
//! uses to find the element. Keyed nodes rely on `data-*` attributes the
//! markup carries for that purpose.

use std::fmt;

use dashview_widgets::document::Viewer;
use dashview_widgets::modal::{OverlayElement, SourceSlot};
use dashview_widgets::view_mode::ViewMode;
use dashview_widgets::{GroupId, ItemId};

/// One addressable element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    LoadingScreen,
    Navbar,
    MenuToggle,
    NavLinks,
    /// Navigation link for a section id.
    NavLink(String),
    /// In-page anchor by its `href`.
    Anchor(String),
    Hero,
    Body,
    SearchBox,
    Counter(String),
    ProgressFill(String),
    ProgressLabel(String),
    Reveal(String),
    GalleryTab(String),
    GridItem(ItemId),
    AccordionGroup(GroupId),
    AccordionHeader(GroupId),
    AccordionItem(ItemId),
    ViewButton(ViewMode),
    AccordionView,
    GridView,
    GridTabs,
    /// Overlay root; also its scrim for click-outside detection.
    Overlay(OverlayElement),
    ModalClose,
    Source(SourceSlot),
    Description(String),
    DescriptionButton(String),
}

impl Node {
    /// The element a document viewer renders into.
    #[must_use]
    pub fn viewer(viewer: Viewer) -> Self {
        Self::Source(viewer.into())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadingScreen => f.write_str("#loading-screen"),
            Self::Navbar => f.write_str("#navbar"),
            Self::MenuToggle => f.write_str("#menu-toggle"),
            Self::NavLinks => f.write_str(".nav-links"),
            Self::NavLink(id) => write!(f, ".nav-link[href=\"#{id}\"]"),
            Self::Anchor(href) => write!(f, "a[href=\"{href}\"]"),
            Self::Hero => f.write_str(".hero"),
            Self::Body => f.write_str("body"),
            Self::SearchBox => f.write_str("#gallery-search"),
            Self::Counter(key) => write!(f, ".stat-number[data-key=\"{key}\"]"),
            Self::ProgressFill(key) => write!(f, ".progress-fill[data-key=\"{key}\"]"),
            Self::ProgressLabel(key) => write!(f, ".progress-percentage[data-key=\"{key}\"]"),
            Self::Reveal(key) => write!(f, "[data-reveal=\"{key}\"]"),
            Self::GalleryTab(tag) => write!(f, ".gallery-tab[data-category=\"{tag}\"]"),
            Self::GridItem(id) => write!(f, ".gallery-item[data-id=\"{id}\"]"),
            Self::AccordionGroup(id) => write!(f, ".accordion-category[data-id=\"{id}\"]"),
            Self::AccordionHeader(id) => {
                write!(f, ".accordion-category[data-id=\"{id}\"] > .accordion-header")
            }
            Self::AccordionItem(id) => write!(f, ".accordion-item[data-id=\"{id}\"]"),
            Self::ViewButton(mode) => write!(f, ".view-toggle-btn[data-view=\"{mode}\"]"),
            Self::AccordionView => f.write_str("#gallery-accordion"),
            Self::GridView => f.write_str(".gallery-grid"),
            Self::GridTabs => f.write_str(".gallery-tabs"),
            Self::Overlay(element) => f.write_str(match element {
                OverlayElement::DocumentModal => "#modal",
                OverlayElement::ProjectModal => "#project-modal",
                OverlayElement::InspectionModal => "#inspection-plan-modal",
                OverlayElement::MonthlyPopup => "#monthly-plan-popup",
            }),
            Self::ModalClose => f.write_str(".modal-close"),
            Self::Source(slot) => f.write_str(match slot {
                SourceSlot::Image => "#modal-img",
                SourceSlot::Pdf => "#modal-pdf",
                SourceSlot::Office => "#modal-pptx",
                SourceSlot::Project => "#project-iframe",
                SourceSlot::MonthlyPlan => "#monthly-plan-iframe",
            }),
            Self::Description(id) => write!(f, "#desc-{id}"),
            Self::DescriptionButton(id) => write!(f, "[data-desc-toggle=\"{id}\"]"),
        }
    }
}
