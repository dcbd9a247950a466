//! Flag-to-option mapping from [`ChartData`] to Chart.js configuration objects.

use serde_json::{json, Value};

use super::ChartData;

const GRID_COLOR: &str = "#f1f5f9";
const TICK_COLOR: &str = "#94a3b8";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOptions {
    pub show_legend: bool,
    pub show_grid: bool,
    /// Fill the area under every series.
    pub fill: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_grid: true,
            fill: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarOptions {
    pub show_legend: bool,
    pub show_grid: bool,
    pub stacked: bool,
    pub horizontal: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_grid: true,
            stacked: false,
            horizontal: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieOptions {
    pub show_legend: bool,
    /// Render with a 60% centre cutout.
    pub donut: bool,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            show_legend: true,
            donut: false,
        }
    }
}

pub fn line_config(data: &ChartData, options: &LineOptions) -> Value {
    let mut data = data.clone();
    if options.fill {
        for dataset in &mut data.datasets {
            dataset.fill = Some(true);
        }
    }

    json!({
        "type": "line",
        "data": data,
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "interaction": { "mode": "index", "intersect": false },
            "plugins": {
                "legend": legend(options.show_legend, "top"),
                "tooltip": tooltip(),
            },
            "scales": {
                "x": axis(options.show_grid, None),
                "y": with_zero_baseline(axis(options.show_grid, None)),
            },
            "elements": {
                "line": { "tension": 0.4 },
                "point": { "radius": 3, "hoverRadius": 5 },
            },
        },
    })
}

pub fn bar_config(data: &ChartData, options: &BarOptions) -> Value {
    let index_axis = if options.horizontal { "y" } else { "x" };

    json!({
        "type": "bar",
        "data": data,
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "indexAxis": index_axis,
            "plugins": {
                "legend": legend(options.show_legend, "top"),
                "tooltip": tooltip(),
            },
            "scales": {
                "x": axis(options.show_grid && !options.horizontal, Some(options.stacked)),
                "y": with_zero_baseline(axis(options.show_grid, Some(options.stacked))),
            },
        },
    })
}

pub fn pie_config(data: &ChartData, options: &PieOptions) -> Value {
    let mut config = json!({
        "type": "pie",
        "data": data,
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": legend(options.show_legend, "bottom"),
                "tooltip": tooltip(),
            },
        },
    });

    if options.donut {
        config["options"]["cutout"] = json!("60%");
    }
    if let Some(labels) = config["options"]["plugins"]["legend"]["labels"].as_object_mut() {
        labels.insert("padding".into(), json!(20));
    }

    config
}

fn legend(display: bool, position: &str) -> Value {
    json!({
        "display": display,
        "position": position,
        "labels": {
            "usePointStyle": true,
            "boxWidth": 6,
            "font": { "size": 12 },
        },
    })
}

fn tooltip() -> Value {
    json!({
        "enabled": true,
        "backgroundColor": "rgba(255, 255, 255, 0.8)",
        "titleColor": "#64748b",
        "bodyColor": "#334155",
        "borderColor": "#e2e8f0",
        "borderWidth": 1,
        "padding": 12,
        "boxPadding": 6,
        "bodyFont": { "size": 13 },
        "titleFont": { "size": 12, "weight": "bold" },
        "cornerRadius": 6,
    })
}

fn axis(show_grid: bool, stacked: Option<bool>) -> Value {
    let mut axis = json!({
        "grid": { "display": show_grid, "color": GRID_COLOR },
        "ticks": { "font": { "size": 11 }, "color": TICK_COLOR },
    });
    if let Some(stacked) = stacked {
        axis["stacked"] = json!(stacked);
    }
    axis
}

fn with_zero_baseline(mut axis: Value) -> Value {
    axis["beginAtZero"] = json!(true);
    axis
}
