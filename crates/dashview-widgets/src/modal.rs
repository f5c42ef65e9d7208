#![forbid(unsafe_code)]

//! Overlay state machine.
//!
//! Overlays live on three layers, ordered by Escape priority:
//!
//! | Layer | Overlays | Element(s) |
//! |-------|----------|------------|
//! | [`Layer::MonthlyPlanPopup`] (highest) | monthly plan popup | popup + iframe |
//! | [`Layer::InspectionPlan`] | inspection plan description | modal, body scroll lock |
//! | [`Layer::Generic`] (lowest) | image/document viewer *or* external project | shared close |
//!
//! [`ModalController::open`] is last-writer-wins: every active layer is
//! closed before the requested overlay is shown. [`ModalController::layer`]
//! instead adds an overlay on top of whatever is open, replacing only the
//! overlay on its own layer. Escape closes the single highest active layer.
//!
//! Every transition is reported as a list of [`ModalEffect`]s. Closing
//! always clears the sources of the closed overlay so in-flight loads stop;
//! the monthly popup defers its clear until its closing transition ends.

use core::time::Duration;
use std::fmt;

use crate::document::{
    DEFAULT_OFFICE_VIEWER, DocumentError, DocumentKind, PageLocation, Viewer, office_viewer_url,
};

/// Monthly inspection plan loaded by the supplementary popup.
pub const DEFAULT_MONTHLY_PLAN_URL: &str = "https://aliabdelaal-adm.github.io/Monthly_inspection_plan/";

/// Closing transition length of the monthly popup.
pub const DEFAULT_POPUP_CLEAR_DELAY: Duration = Duration::from_millis(300);

/// Escape-priority layer. Higher variants close first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Generic,
    InspectionPlan,
    MonthlyPlanPopup,
}

impl Layer {
    /// Layers from highest to lowest Escape priority.
    pub const ESCAPE_ORDER: [Self; 3] = [Self::MonthlyPlanPopup, Self::InspectionPlan, Self::Generic];

    const fn slot(self) -> usize {
        match self {
            Self::Generic => 0,
            Self::InspectionPlan => 1,
            Self::MonthlyPlanPopup => 2,
        }
    }
}

/// Overlay root elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayElement {
    DocumentModal,
    ProjectModal,
    InspectionModal,
    MonthlyPopup,
}

/// Elements whose `src` the controller loads and clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceSlot {
    Image,
    Pdf,
    Office,
    Project,
    MonthlyPlan,
}

impl From<Viewer> for SourceSlot {
    fn from(viewer: Viewer) -> Self {
        match viewer {
            Viewer::Image => Self::Image,
            Viewer::Pdf => Self::Pdf,
            Viewer::Office => Self::Office,
        }
    }
}

/// An overlay and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Document { src: String, kind: DocumentKind },
    ExternalProject { url: String },
    InspectionPlan,
    MonthlyPlanPopup,
}

impl Overlay {
    /// Parse the markup `type` and build a document overlay.
    pub fn document(src: impl Into<String>, kind: &str) -> Result<Self, DocumentError> {
        Ok(Self::Document {
            src: src.into(),
            kind: kind.parse()?,
        })
    }

    #[must_use]
    pub const fn layer(&self) -> Layer {
        match self {
            Self::Document { .. } | Self::ExternalProject { .. } => Layer::Generic,
            Self::InspectionPlan => Layer::InspectionPlan,
            Self::MonthlyPlanPopup => Layer::MonthlyPlanPopup,
        }
    }

    #[must_use]
    pub const fn element(&self) -> OverlayElement {
        match self {
            Self::Document { .. } => OverlayElement::DocumentModal,
            Self::ExternalProject { .. } => OverlayElement::ProjectModal,
            Self::InspectionPlan => OverlayElement::InspectionModal,
            Self::MonthlyPlanPopup => OverlayElement::MonthlyPopup,
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document { src, .. } => write!(f, "document({src})"),
            Self::ExternalProject { url } => write!(f, "project({url})"),
            Self::InspectionPlan => f.write_str("inspection-plan"),
            Self::MonthlyPlanPopup => f.write_str("monthly-plan-popup"),
        }
    }
}

/// A DOM-level consequence of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEffect {
    Activate(OverlayElement),
    Deactivate(OverlayElement),
    ShowViewer(Viewer),
    HideViewer(Viewer),
    SetSource { slot: SourceSlot, url: String },
    ClearSource(SourceSlot),
    /// Clear a source once the closing transition has run.
    ClearSourceAfter { slot: SourceSlot, delay: Duration },
    /// Lock (`true`) or restore (`false`) page scrolling.
    LockScroll(bool),
}

/// Addresses and timings the controller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfig {
    pub location: PageLocation,
    pub office_viewer: String,
    pub monthly_plan_url: String,
    pub popup_clear_delay: Duration,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            location: PageLocation::default(),
            office_viewer: DEFAULT_OFFICE_VIEWER.to_owned(),
            monthly_plan_url: DEFAULT_MONTHLY_PLAN_URL.to_owned(),
            popup_clear_delay: DEFAULT_POPUP_CLEAR_DELAY,
        }
    }
}

/// Which overlays are active, one slot per [`Layer`].
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    config: ModalConfig,
    layers: [Option<Overlay>; 3],
}

impl ModalController {
    #[must_use]
    pub fn new(config: ModalConfig) -> Self {
        Self {
            config,
            layers: [None, None, None],
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Highest-priority active overlay.
    #[must_use]
    pub fn active(&self) -> Option<&Overlay> {
        Layer::ESCAPE_ORDER
            .iter()
            .find_map(|layer| self.layers[layer.slot()].as_ref())
    }

    /// All active overlays, highest priority first.
    pub fn active_overlays(&self) -> impl Iterator<Item = &Overlay> {
        Layer::ESCAPE_ORDER
            .iter()
            .filter_map(|layer| self.layers[layer.slot()].as_ref())
    }

    /// Overlay on `layer`, if active.
    #[must_use]
    pub fn on_layer(&self, layer: Layer) -> Option<&Overlay> {
        self.layers[layer.slot()].as_ref()
    }

    /// Whether `element` is showing.
    #[must_use]
    pub fn is_active(&self, element: OverlayElement) -> bool {
        self.layers
            .iter()
            .flatten()
            .any(|overlay| overlay.element() == element)
    }

    /// Show `overlay` alone, closing every other active overlay first.
    pub fn open(&mut self, overlay: Overlay) -> Vec<ModalEffect> {
        let mut effects = Vec::new();
        for layer in Layer::ESCAPE_ORDER {
            effects.extend(self.close_layer(layer));
        }
        effects.extend(self.activate(overlay));
        effects
    }

    /// Show `overlay` on top of whatever is open, replacing only its own layer.
    pub fn layer(&mut self, overlay: Overlay) -> Vec<ModalEffect> {
        let mut effects = self.close_layer(overlay.layer());
        effects.extend(self.activate(overlay));
        effects
    }

    fn activate(&mut self, overlay: Overlay) -> Vec<ModalEffect> {
        let mut effects = Vec::new();
        match &overlay {
            Overlay::Document { src, kind } => {
                effects.push(ModalEffect::Activate(OverlayElement::DocumentModal));
                let shown = kind.viewer();
                for viewer in Viewer::ALL {
                    if viewer == shown {
                        effects.push(ModalEffect::ShowViewer(viewer));
                    } else {
                        effects.push(ModalEffect::HideViewer(viewer));
                        effects.push(ModalEffect::ClearSource(viewer.into()));
                    }
                }
                let url = match kind {
                    DocumentKind::Office(_) => {
                        office_viewer_url(&self.config.office_viewer, &self.config.location, src)
                    }
                    DocumentKind::Image | DocumentKind::Pdf => src.clone(),
                };
                effects.push(ModalEffect::SetSource {
                    slot: shown.into(),
                    url,
                });
            }
            Overlay::ExternalProject { url } => {
                effects.push(ModalEffect::Activate(OverlayElement::ProjectModal));
                effects.push(ModalEffect::SetSource {
                    slot: SourceSlot::Project,
                    url: url.clone(),
                });
            }
            Overlay::InspectionPlan => {
                effects.push(ModalEffect::Activate(OverlayElement::InspectionModal));
                effects.push(ModalEffect::LockScroll(true));
            }
            Overlay::MonthlyPlanPopup => {
                effects.push(ModalEffect::SetSource {
                    slot: SourceSlot::MonthlyPlan,
                    url: self.config.monthly_plan_url.clone(),
                });
                effects.push(ModalEffect::Activate(OverlayElement::MonthlyPopup));
            }
        }
        dashview_core::debug!(overlay = %overlay, "overlay opened");
        let slot = overlay.layer().slot();
        self.layers[slot] = Some(overlay);
        effects
    }

    /// Close whatever is on `layer`.
    pub fn close_layer(&mut self, layer: Layer) -> Vec<ModalEffect> {
        let Some(overlay) = self.layers[layer.slot()].take() else {
            return Vec::new();
        };
        dashview_core::debug!(overlay = %overlay, "overlay closed");
        match overlay {
            Overlay::Document { .. } => {
                let mut effects = vec![ModalEffect::Deactivate(OverlayElement::DocumentModal)];
                effects.extend(
                    Viewer::ALL
                        .into_iter()
                        .map(|viewer| ModalEffect::ClearSource(viewer.into())),
                );
                effects
            }
            Overlay::ExternalProject { .. } => vec![
                ModalEffect::Deactivate(OverlayElement::ProjectModal),
                ModalEffect::ClearSource(SourceSlot::Project),
            ],
            Overlay::InspectionPlan => vec![
                ModalEffect::Deactivate(OverlayElement::InspectionModal),
                ModalEffect::LockScroll(false),
            ],
            Overlay::MonthlyPlanPopup => vec![
                ModalEffect::Deactivate(OverlayElement::MonthlyPopup),
                ModalEffect::ClearSourceAfter {
                    slot: SourceSlot::MonthlyPlan,
                    delay: self.config.popup_clear_delay,
                },
            ],
        }
    }

    /// Close `element` if it is the one showing on its layer.
    pub fn close_element(&mut self, element: OverlayElement) -> Vec<ModalEffect> {
        let layer = self
            .layers
            .iter()
            .flatten()
            .find(|overlay| overlay.element() == element)
            .map(Overlay::layer);
        match layer {
            Some(layer) => self.close_layer(layer),
            None => Vec::new(),
        }
    }

    /// Escape key: close the highest-priority active layer only.
    pub fn escape(&mut self) -> Vec<ModalEffect> {
        match Layer::ESCAPE_ORDER
            .into_iter()
            .find(|layer| self.layers[layer.slot()].is_some())
        {
            Some(layer) => self.close_layer(layer),
            None => Vec::new(),
        }
    }

    /// Click whose target is exactly `element`'s scrim (not a descendant).
    pub fn scrim_click(&mut self, element: OverlayElement) -> Vec<ModalEffect> {
        self.close_element(element)
    }
}
