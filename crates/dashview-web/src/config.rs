#![forbid(unsafe_code)]

//! Page timing, threshold and URL configuration.
//!
//! [`PageConfig::default`] reproduces the shipped page. Hosts may override
//! any subset of fields with a JSON object via [`PageConfig::from_json`];
//! durations are expressed in milliseconds.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use dashview_core::visibility::IntersectionConfig;
use dashview_widgets::chart::{ChartSpec, default_charts};
use dashview_widgets::document::DEFAULT_OFFICE_VIEWER;
use dashview_widgets::modal::DEFAULT_MONTHLY_PLAN_URL;
use dashview_widgets::scroll_tracker::ScrollConfig;

use crate::PageError;

/// Every tunable the page runtime reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub loading_delay_ms: u64,
    pub search_debounce_ms: u64,
    pub fade_removal_ms: u64,
    pub popup_clear_delay_ms: u64,
    pub frame_interval_ms: u64,
    pub counter_duration_ms: u64,
    pub progress_duration_ms: u64,
    pub progress_fill_delay_ms: u64,
    pub description_expand_scroll_ms: u64,
    pub description_collapse_scroll_ms: u64,

    pub navbar_hide_threshold: f64,
    pub section_activation_offset: f64,
    pub anchor_offset: f64,
    pub parallax_factor: f64,

    pub counter_threshold: f64,
    pub progress_threshold: f64,
    pub reveal_threshold: f64,
    /// Bottom root margin for the reveal observer. The page only sees the
    /// visible fractions the host reports, so the host applies this margin
    /// when it builds its observer (see [`PageConfig::reveal_observer`]).
    pub reveal_root_margin_bottom: f64,

    pub office_viewer_url: String,
    pub monthly_plan_url: String,

    /// Charts constructed at startup.
    pub charts: Vec<ChartSpec>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 1000,
            search_debounce_ms: 300,
            fade_removal_ms: 300,
            popup_clear_delay_ms: 300,
            frame_interval_ms: 16,
            counter_duration_ms: 2000,
            progress_duration_ms: 1500,
            progress_fill_delay_ms: 200,
            description_expand_scroll_ms: 100,
            description_collapse_scroll_ms: 300,
            navbar_hide_threshold: 100.0,
            section_activation_offset: 200.0,
            anchor_offset: 80.0,
            parallax_factor: 0.5,
            counter_threshold: 0.5,
            progress_threshold: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin_bottom: -50.0,
            office_viewer_url: DEFAULT_OFFICE_VIEWER.to_owned(),
            monthly_plan_url: DEFAULT_MONTHLY_PLAN_URL.to_owned(),
            charts: default_charts(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// The override must be a JSON object; arrays and scalars are rejected.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|err| PageError::Config(err.to_string()))?;
        if !value.is_object() {
            return Err(PageError::Config(
                "page config must be a JSON object".to_owned(),
            ));
        }
        serde_json::from_value(value).map_err(|err| PageError::Config(err.to_string()))
    }

    #[must_use]
    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debounce_ms = millis(delay);
        self
    }

    #[must_use]
    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay_ms = millis(delay);
        self
    }

    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval_ms = millis(interval);
        self
    }

    #[must_use]
    pub fn with_charts(mut self, charts: Vec<ChartSpec>) -> Self {
        self.charts = charts;
        self
    }

    #[must_use]
    pub fn with_monthly_plan_url(mut self, url: impl Into<String>) -> Self {
        self.monthly_plan_url = url.into();
        self
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn fade_removal(&self) -> Duration {
        Duration::from_millis(self.fade_removal_ms)
    }

    pub fn popup_clear_delay(&self) -> Duration {
        Duration::from_millis(self.popup_clear_delay_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn progress_duration(&self) -> Duration {
        Duration::from_millis(self.progress_duration_ms)
    }

    pub fn progress_fill_delay(&self) -> Duration {
        Duration::from_millis(self.progress_fill_delay_ms)
    }

    pub fn description_expand_scroll(&self) -> Duration {
        Duration::from_millis(self.description_expand_scroll_ms)
    }

    pub fn description_collapse_scroll(&self) -> Duration {
        Duration::from_millis(self.description_collapse_scroll_ms)
    }

    pub fn scroll(&self) -> ScrollConfig {
        ScrollConfig {
            hide_threshold: self.navbar_hide_threshold,
            activation_offset: self.section_activation_offset,
            parallax_factor: self.parallax_factor,
        }
    }

    pub fn counter_observer(&self) -> IntersectionConfig {
        IntersectionConfig::with_threshold(self.counter_threshold)
    }

    pub fn progress_observer(&self) -> IntersectionConfig {
        IntersectionConfig::with_threshold(self.progress_threshold)
    }

    pub fn reveal_observer(&self) -> IntersectionConfig {
        IntersectionConfig::with_threshold(self.reveal_threshold)
            .with_root_margin_bottom(self.reveal_root_margin_bottom)
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
