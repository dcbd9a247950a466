//! Library-agnostic chart payloads plus the Chart.js adapters that render them.
//!
//! Pages build a [`ChartData`] (category labels + named series with style
//! hints) and hand it to one of the chart components. The components translate
//! it with [`config`] and push the result to the page's chart bridge
//! (`assets/charts.js`).

pub mod config;
mod view;

pub use config::{bar_config, line_config, pie_config, BarOptions, LineOptions, PieOptions};
pub use view::{BarChart, ChartCanvas, LineChart, PieChart};

use serde::Serialize;

/// A colour for a whole series or one colour per data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl From<&str> for Paint {
    fn from(value: &str) -> Self {
        Paint::Solid(value.to_string())
    }
}

impl From<Vec<&str>> for Paint {
    fn from(values: Vec<&str>) -> Self {
        Paint::PerPoint(values.into_iter().map(str::to_string).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            label: label.into(),
            data: values.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background_color = Some(paint.into());
        self
    }

    pub fn border(mut self, paint: impl Into<Paint>) -> Self {
        self.border_color = Some(paint.into());
        self
    }

    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn datasets_serialize_with_chart_field_names() {
        let data = ChartData::new(
            vec!["01-01".into(), "01-02".into()],
            vec![Dataset::new("Revenue", [1.0, 2.0])
                .border("#10b981")
                .background("rgba(16, 185, 129, 0.1)")
                .tension(0.3)],
        );

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "labels": ["01-01", "01-02"],
                "datasets": [{
                    "label": "Revenue",
                    "data": [1.0, 2.0],
                    "backgroundColor": "rgba(16, 185, 129, 0.1)",
                    "borderColor": "#10b981",
                    "tension": 0.3
                }]
            })
        );
    }

    #[test]
    fn per_point_paint_serializes_as_array() {
        let dataset = Dataset::new("Sources", [1.0]).background(vec!["red", "blue"]);
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["backgroundColor"], json!(["red", "blue"]));
    }
}
