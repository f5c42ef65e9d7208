#![forbid(unsafe_code)]

//! Declarative chart specs for the external charting library.
//!
//! The library is an opaque sink: the page hands it a canvas and a config
//! object once at startup and never reads anything back. Specs here
//! serialize to the library's `{ type, data, options }` shape.
//!
//! Formatter callbacks cannot travel as JSON; [`ChartSpec::value_suffix`]
//! tells the host glue which suffix to append to axis ticks and tooltips.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Warning logged when the library is not loaded.
pub const LIBRARY_MISSING_WARNING: &str = "Chart.js not loaded, skipping charts initialization";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One chart: where it renders and what it shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub canvas_id: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(default)]
    pub options: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_suffix: Option<String>,
}

impl ChartSpec {
    /// The `{ type, data, options }` object passed to the chart constructor.
    #[must_use]
    pub fn library_config(&self) -> Value {
        json!({
            "type": self.kind,
            "data": self.data,
            "options": self.options,
        })
    }
}

const FONT_FAMILY: &str = "Cairo, sans-serif";

fn palette(alpha: &str) -> Vec<String> {
    ["231, 76, 60", "52, 152, 219", "155, 89, 182", "26, 188, 156"]
        .iter()
        .map(|rgb| format!("rgba({rgb}, {alpha})"))
        .collect()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Horizontal bar chart of objective completion.
#[must_use]
pub fn objectives_chart() -> ChartSpec {
    ChartSpec {
        canvas_id: "objectivesChart".to_owned(),
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(&[
                "تنفيذ الطلبات ذات الأولوية",
                "تحقيق المستهدفات الاستراتيجية",
                "تحقيق مؤشرات الأداء",
                "تنفيذ الأنشطة الداعمة",
            ]),
            datasets: vec![Dataset {
                label: "نسبة الإنجاز %".to_owned(),
                data: vec![100.0, 100.0, 100.0, 100.0],
                background_color: palette("0.8"),
                border_color: palette("1"),
                border_width: 2,
                border_radius: Some(8),
                hover_offset: None,
            }],
        },
        options: json!({
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "title": { "display": false }
            },
            "scales": {
                "x": {
                    "beginAtZero": true,
                    "max": 100,
                    "ticks": { "font": { "family": FONT_FAMILY, "size": 12 } },
                    "grid": { "color": "rgba(0, 0, 0, 0.05)" }
                },
                "y": {
                    "ticks": { "font": { "family": FONT_FAMILY, "size": 13, "weight": "600" } },
                    "grid": { "display": false }
                }
            }
        }),
        value_suffix: Some("%".to_owned()),
    }
}

/// Doughnut chart of KPI progress.
#[must_use]
pub fn kpi_chart() -> ChartSpec {
    ChartSpec {
        canvas_id: "kpiChart".to_owned(),
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: labels(&[
                "التحكم في الحيوانات الضالة",
                "الأحياء الصديقة للحيوانات",
                "تحسين عمليات التفتيش",
                "الحد من مخاطر الصحة",
            ]),
            datasets: vec![Dataset {
                label: "التقدم".to_owned(),
                data: vec![100.0, 100.0, 100.0, 100.0],
                background_color: palette("0.8"),
                border_color: palette("1"),
                border_width: 3,
                border_radius: None,
                hover_offset: Some(20),
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "rtl": true,
                    "labels": {
                        "font": { "family": FONT_FAMILY, "size": 13, "weight": "600" },
                        "padding": 15,
                        "usePointStyle": true,
                        "pointStyle": "circle"
                    }
                },
                "tooltip": {
                    "rtl": true,
                    "bodyFont": { "family": FONT_FAMILY, "size": 14 }
                }
            }
        }),
        value_suffix: Some("%".to_owned()),
    }
}

/// The dashboard's stock charts.
#[must_use]
pub fn default_charts() -> Vec<ChartSpec> {
    vec![objectives_chart(), kpi_chart()]
}

/// Outcome of [`ChartAdapter::init`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartRender {
    /// The library is not loaded; nothing was rendered.
    Skipped { warning: &'static str },
    /// Charts whose canvas exists, ready to construct.
    Rendered(Vec<ChartSpec>),
    /// `init` already ran.
    AlreadyInitialized,
}

/// Fire-once chart construction.
#[derive(Debug, Clone, Default)]
pub struct ChartAdapter {
    specs: Vec<ChartSpec>,
    initialized: bool,
}

impl ChartAdapter {
    #[must_use]
    pub fn new(specs: Vec<ChartSpec>) -> Self {
        Self {
            specs,
            initialized: false,
        }
    }

    #[must_use]
    pub fn specs(&self) -> &[ChartSpec] {
        &self.specs
    }

    /// Build the charts once. Charts without a canvas are skipped silently.
    pub fn init(
        &mut self,
        library_available: bool,
        has_canvas: impl Fn(&str) -> bool,
    ) -> ChartRender {
        if std::mem::replace(&mut self.initialized, true) {
            return ChartRender::AlreadyInitialized;
        }
        if !library_available {
            dashview_core::warn!("{LIBRARY_MISSING_WARNING}");
            return ChartRender::Skipped {
                warning: LIBRARY_MISSING_WARNING,
            };
        }
        ChartRender::Rendered(
            self.specs
                .iter()
                .filter(|spec| has_canvas(&spec.canvas_id))
                .cloned()
                .collect(),
        )
    }
}
