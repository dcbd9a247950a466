use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use super::config::{bar_config, line_config, pie_config, BarOptions, LineOptions, PieOptions};
use super::ChartData;
use crate::components::card::{Card, CardBody, CardHeader};

static NEXT_CANVAS: AtomicUsize = AtomicUsize::new(0);

/// Hands a config to `window.startupMetricsCharts`, retrying while Chart.js or
/// the bridge script are still loading.
const RENDER_SCRIPT: &str = r#"
(function draw(attempt) {
    const bridge = window.startupMetricsCharts;
    if (bridge && bridge.ready()) {
        bridge.render(__ID__, __CONFIG__);
    } else if (attempt < 50) {
        setTimeout(function () { draw(attempt + 1); }, 100);
    }
})(0);
"#;

const DESTROY_SCRIPT: &str = r#"
if (window.startupMetricsCharts) { window.startupMetricsCharts.destroy(__ID__); }
"#;

/// A `<canvas>` owned by one Chart.js instance. The chart is rebuilt whenever
/// `config` changes and destroyed when the component unmounts.
#[component]
pub fn ChartCanvas(config: String, #[props(default = 300)] height: u32) -> Element {
    let canvas_id = use_hook(|| {
        let n = NEXT_CANVAS.fetch_add(1, Ordering::Relaxed);
        format!("chart-canvas-{n}")
    });

    let render_id = canvas_id.clone();
    use_effect(use_reactive!(|(config,)| {
        let script = RENDER_SCRIPT
            .replace("__ID__", &js_string(&render_id))
            .replace("__CONFIG__", &config);
        let _ = document::eval(&script);
    }));

    let drop_id = canvas_id.clone();
    use_drop(move || {
        let _ = document::eval(&DESTROY_SCRIPT.replace("__ID__", &js_string(&drop_id)));
    });

    rsx! {
        div { class: "chart", style: "height: {height}px;",
            canvas { id: "{canvas_id}" }
        }
    }
}

fn js_string(raw: &str) -> String {
    serde_json::Value::String(raw.to_string()).to_string()
}

fn render_config(kind: &str, config: serde_json::Value) -> Option<String> {
    match serde_json::to_string(&config) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!(kind, %err, "chart config could not be serialized");
            None
        }
    }
}

#[component]
fn ChartFrame(title: String, height: u32, config: Option<String>) -> Element {
    rsx! {
        Card { class: "chart-card",
            CardHeader {
                h3 { class: "chart-card__title", "{title}" }
            }
            CardBody {
                if let Some(config) = config {
                    ChartCanvas { config, height }
                } else {
                    div { class: "chart chart--empty", style: "height: {height}px;" }
                }
            }
        }
    }
}

#[component]
pub fn LineChart(
    title: String,
    data: ChartData,
    #[props(default = 300)] height: u32,
    #[props(default = true)] show_legend: bool,
    #[props(default = true)] show_grid: bool,
    #[props(default = false)] fill: bool,
) -> Element {
    let options = LineOptions {
        show_legend,
        show_grid,
        fill,
    };
    let config = render_config("line", line_config(&data, &options));

    rsx! {
        ChartFrame { title, height, config }
    }
}

#[component]
pub fn BarChart(
    title: String,
    data: ChartData,
    #[props(default = 300)] height: u32,
    #[props(default = true)] show_legend: bool,
    #[props(default = true)] show_grid: bool,
    #[props(default = false)] stacked: bool,
    #[props(default = false)] horizontal: bool,
) -> Element {
    let options = BarOptions {
        show_legend,
        show_grid,
        stacked,
        horizontal,
    };
    let config = render_config("bar", bar_config(&data, &options));

    rsx! {
        ChartFrame { title, height, config }
    }
}

#[component]
pub fn PieChart(
    title: String,
    data: ChartData,
    #[props(default = 300)] height: u32,
    #[props(default = true)] show_legend: bool,
    #[props(default = false)] donut: bool,
) -> Element {
    let options = PieOptions { show_legend, donut };
    let config = render_config("pie", pie_config(&data, &options));

    rsx! {
        ChartFrame { title, height, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_ids_are_quoted_for_scripts() {
        assert_eq!(js_string("chart-canvas-3"), "\"chart-canvas-3\"");
    }

    #[test]
    fn render_script_embeds_id_and_config() {
        let script = RENDER_SCRIPT
            .replace("__ID__", &js_string("chart-canvas-0"))
            .replace("__CONFIG__", "{\"type\":\"line\"}");
        assert!(script.contains("bridge.render(\"chart-canvas-0\", {\"type\":\"line\"})"));
    }
}
