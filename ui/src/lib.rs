//! Shared UI crate for StartupMetrics. Metric generation, formatting, chart
//! adapters, components and pages live here; the platform crates only add
//! routing and launch configuration.

use dioxus::prelude::*;

pub mod charts;
pub mod core;
pub mod i18n;
pub mod pages;
pub mod views;

pub mod components {
    pub mod card;
    pub mod date_range_selector;
    pub mod kpi_card;
    pub mod tabs;

    // Sidebar shell (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme stylesheet.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
/// Chart.js bridge (`window.startupMetricsCharts`).
pub const CHARTS_JS: Asset = asset!("/assets/charts.js");
/// Chart.js build the bridge drives.
pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
