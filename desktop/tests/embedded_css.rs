#![cfg(test)]
//! The desktop shell inlines the shared theme (`ui/assets/theme/main.css`) and
//! the chart bridge (`ui/assets/charts.js`). A truncated or moved file would only
//! show up at runtime, so these checks fail the build early instead.
//!
//! If either file is renamed, update both this test and the `include_str!`
//! constants in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const EMBEDDED_CHARTS_JS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/charts.js"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--font-sans", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn chart_bridge_exposes_render_and_destroy() {
    for token in [
        "window.startupMetricsCharts",
        "ready:",
        "render:",
        "destroy:",
        "new window.Chart(",
        "Chart.defaults.color = \"#64748b\"",
    ] {
        assert!(
            EMBEDDED_CHARTS_JS.contains(token),
            "Expected `{token}` in the embedded chart bridge"
        );
    }
}
