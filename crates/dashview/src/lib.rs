#![forbid(unsafe_code)]

//! dashview public facade crate.
//!
//! Re-exports the page runtime and the widget state machines behind one
//! dependency, plus a prelude for host glue.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use dashview_core::animation::{CounterAnimation, CounterFrame, ProgressFill, Reveal};
pub use dashview_core::debounce::Debouncer;
pub use dashview_core::frame_coalescer::FrameCoalescer;
pub use dashview_core::scheduler::{DeterministicClock, FrameId, Scheduler, TimerId};
pub use dashview_core::visibility::{IntersectionConfig, OneShotObserver};

// --- Widget re-exports -----------------------------------------------------

pub use dashview_widgets::accordion::{Accordion, AccordionGroup};
pub use dashview_widgets::chart::{ChartAdapter, ChartSpec};
pub use dashview_widgets::document::{DocumentAction, DocumentError, DocumentKind, PageLocation};
pub use dashview_widgets::filter::CategoryFilter;
pub use dashview_widgets::modal::{ModalController, Overlay, OverlayElement};
pub use dashview_widgets::scroll_tracker::{ScrollTracker, Section};
pub use dashview_widgets::search::{GallerySearch, SearchQuery};
pub use dashview_widgets::view_mode::{ViewMode, ViewModeParseError};
pub use dashview_widgets::{ContentItem, GroupId, ItemId};

// --- Web re-exports --------------------------------------------------------

pub use dashview_web::{
    CounterSpec, DashboardPage, DomPatch, Elements, EventResponse, HostCommand, HostEvent, Node,
    PageConfig, PageError, PageLayout, PageOutputs, ProgressSpec,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for dashview hosts.
#[derive(Debug)]
pub enum Error {
    /// Page construction or configuration failure.
    Page(PageError),
    /// Document type or route failure.
    Document(DocumentError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(err) => write!(f, "{err}"),
            Self::Document(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Page(err) => Some(err),
            Self::Document(err) => Some(err),
        }
    }
}

impl From<PageError> for Error {
    fn from(err: PageError) -> Self {
        Self::Page(err)
    }
}

impl From<DocumentError> for Error {
    fn from(err: DocumentError) -> Self {
        Self::Document(err)
    }
}

/// Standard result type for dashview APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build and initialize a page in one step.
///
/// `config_json` overrides defaults when given.
pub fn start(layout: PageLayout, config_json: Option<&str>) -> Result<DashboardPage> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(json)?,
        None => PageConfig::default(),
    };
    let mut page = DashboardPage::new(layout, config)?;
    page.init()?;
    Ok(page)
}

/// Install the JSON `tracing` subscriber (env-filtered).
#[cfg(feature = "tracing-json")]
pub use dashview_core::logging::init_json_subscriber;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DashboardPage, DomPatch, Elements, Error, EventResponse, HostCommand, HostEvent, Node,
        PageConfig, PageLayout, PageOutputs, Result, ViewMode,
    };

    pub use crate::{core, web, widgets};
}

pub use dashview_core as core;
pub use dashview_web as web;
pub use dashview_widgets as widgets;
