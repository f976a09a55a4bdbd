//! Rendering-surface configuration for the time-axis area chart.
//!
//! Serializes to the camelCase option object the chart surface consumes.
//! Label formatters are not part of this object; they travel alongside it in
//! a [`ChartFrame`](super::ChartFrame).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartSection,
    pub data_labels: DataLabels,
    pub markers: Markers,
    pub title: Title,
    pub fill: Fill,
    pub yaxis: YAxis,
    pub xaxis: XAxis,
    pub tooltip: Tooltip,
}

// ─── chart ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub stacked: bool,
    pub height: u32,
    pub zoom: Zoom,
    pub toolbar: Toolbar,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            kind: "area".to_string(),
            stacked: false,
            height: 350,
            zoom: Zoom::default(),
            toolbar: Toolbar::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Zoom {
    #[serde(rename = "type")]
    pub kind: String,
    pub enabled: bool,
    pub auto_scale_yaxis: bool,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            kind: "x".to_string(),
            enabled: true,
            auto_scale_yaxis: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Toolbar {
    pub auto_selected: String,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            auto_selected: "zoom".to_string(),
        }
    }
}

// ─── decorations ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLabels {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    pub text: String,
    pub align: String,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            text: "Crypto Price Movement".to_string(),
            align: "left".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: String,
    pub gradient: Gradient,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            kind: "gradient".to_string(),
            gradient: Gradient::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gradient {
    pub shade_intensity: f64,
    pub inverse_colors: bool,
    pub opacity_from: f64,
    pub opacity_to: f64,
    pub stops: Vec<u32>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            shade_intensity: 1.0,
            inverse_colors: false,
            opacity_from: 0.5,
            opacity_to: 0.0,
            stops: vec![0, 90, 100],
        }
    }
}

// ─── axes + tooltip ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YAxis {
    pub title: AxisTitle,
}

impl Default for YAxis {
    fn default() -> Self {
        Self {
            title: AxisTitle {
                text: "Price".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub tick_amount: u32,
}

impl Default for XAxis {
    fn default() -> Self {
        Self {
            kind: "datetime".to_string(),
            tick_amount: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tooltip {
    pub shared: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_json() {
        let value = serde_json::to_value(ChartOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "chart": {
                    "type": "area",
                    "stacked": false,
                    "height": 350,
                    "zoom": { "type": "x", "enabled": true, "autoScaleYaxis": true },
                    "toolbar": { "autoSelected": "zoom" }
                },
                "dataLabels": { "enabled": false },
                "markers": { "size": 0 },
                "title": { "text": "Crypto Price Movement", "align": "left" },
                "fill": {
                    "type": "gradient",
                    "gradient": {
                        "shadeIntensity": 1.0,
                        "inverseColors": false,
                        "opacityFrom": 0.5,
                        "opacityTo": 0.0,
                        "stops": [0, 90, 100]
                    }
                },
                "yaxis": { "title": { "text": "Price" } },
                "xaxis": { "type": "datetime", "tickAmount": 10 },
                "tooltip": { "shared": false }
            })
        );
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let opts: ChartOptions =
            serde_json::from_str(r#"{"title": {"text": "BTC"}, "chart": {"height": 500}}"#).unwrap();
        assert_eq!(opts.title.text, "BTC");
        assert_eq!(opts.title.align, "left");
        assert_eq!(opts.chart.height, 500);
        assert_eq!(opts.chart.kind, "area");
        assert_eq!(opts.xaxis.tick_amount, 10);
    }
}
