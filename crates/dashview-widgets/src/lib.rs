#![forbid(unsafe_code)]

//! View-state components for the dashview page.
//!
//! Each component owns one small piece of UI state and reports what changed
//! as plain values; it never touches the DOM. The page runtime in
//! `dashview-web` turns those reports into DOM patches.
//!
//! | Component | State |
//! |-----------|-------|
//! | [`scroll_tracker::ScrollTracker`] | navbar visibility, active section, parallax |
//! | [`navigation::MobileMenu`] | mobile menu open flag |
//! | [`filter::CategoryFilter`] | active tab, per-item fade lifecycle |
//! | [`search::GallerySearch`] | search-hidden items and groups |
//! | [`accordion::Accordion`] | expanded groups |
//! | [`view_mode::ViewModeSwitch`] | accordion vs. grid presentation |
//! | [`modal::ModalController`] | active overlays and loaded sources |
//! | [`description::DescriptionPanels`] | expanded description panels |
//! | [`chart::ChartAdapter`] | one-time chart construction |

pub mod accordion;
pub mod chart;
pub mod description;
pub mod document;
pub mod filter;
pub mod item;
pub mod modal;
pub mod navigation;
pub mod scroll_tracker;
pub mod search;
pub mod view_mode;

pub use item::{ContentItem, GroupId, ItemId};
