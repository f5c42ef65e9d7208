#![forbid(unsafe_code)]

//! Accordion / grid presentation switch.
//!
//! Exactly one mode is active. Switching only changes which subtree is
//! shown; filter, search, and expansion state of the content are untouched.

use std::fmt;
use std::str::FromStr;

/// The two presentations of the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Accordion,
    Grid,
}

impl ViewMode {
    pub const ALL: [Self; 2] = [Self::Accordion, Self::Grid];

    /// Markup value (`data-view`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accordion => "accordion",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized `data-view` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeParseError(pub String);

impl fmt::Display for ViewModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view mode: {:?}", self.0)
    }
}

impl std::error::Error for ViewModeParseError {}

impl FromStr for ViewMode {
    type Err = ViewModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accordion" => Ok(Self::Accordion),
            "grid" => Ok(Self::Grid),
            other => Err(ViewModeParseError(other.to_owned())),
        }
    }
}

/// Visibility of every element the switch controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLayout {
    pub mode: ViewMode,
    pub accordion_hidden: bool,
    pub grid_hidden: bool,
    /// The category tabs only make sense for the grid, so they stay visible
    /// in grid mode and hide with it in accordion mode.
    pub tabs_hidden: bool,
    /// Each control with its selected flag (class and `aria-selected`).
    pub controls: [(ViewMode, bool); 2],
}

/// Active presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewModeSwitch {
    active: ViewMode,
}

impl ViewModeSwitch {
    #[must_use]
    pub const fn new(initial: ViewMode) -> Self {
        Self { active: initial }
    }

    #[must_use]
    pub const fn active(&self) -> ViewMode {
        self.active
    }

    /// Activate `mode`. Idempotent.
    pub fn switch(&mut self, mode: ViewMode) -> ViewLayout {
        self.active = mode;
        self.layout()
    }

    /// Element visibility for the current mode.
    #[must_use]
    pub fn layout(&self) -> ViewLayout {
        let grid = self.active == ViewMode::Grid;
        ViewLayout {
            mode: self.active,
            accordion_hidden: grid,
            grid_hidden: !grid,
            tabs_hidden: !grid,
            controls: ViewMode::ALL.map(|m| (m, m == self.active)),
        }
    }
}
