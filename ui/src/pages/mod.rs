//! Routed pages. Each page keeps an immutable state value, a reducer over
//! its events and a projection into chart payloads; the view only wires
//! signals to those pieces.

pub mod dashboard;
pub mod users;

mod labels;
pub use labels::SeriesLabels;

use crate::charts::{ChartData, Dataset};
use crate::core::sources::SourceBreakdown;

/// Line colour and matching translucent fill.
pub(crate) struct Hue {
    pub line: &'static str,
    pub fill: &'static str,
    pub solid: &'static str,
}

pub(crate) const BLUE: Hue = Hue {
    line: "#3b82f6",
    fill: "rgba(59, 130, 246, 0.1)",
    solid: "rgba(59, 130, 246, 0.8)",
};
pub(crate) const SKY: Hue = Hue {
    line: "#0ea5e9",
    fill: "rgba(14, 165, 233, 0.1)",
    solid: "rgba(14, 165, 233, 0.8)",
};
pub(crate) const VIOLET: Hue = Hue {
    line: "#8b5cf6",
    fill: "rgba(139, 92, 246, 0.1)",
    solid: "rgba(139, 92, 246, 0.8)",
};
pub(crate) const GREEN: Hue = Hue {
    line: "#10b981",
    fill: "rgba(16, 185, 129, 0.1)",
    solid: "rgba(16, 185, 129, 0.8)",
};
pub(crate) const AMBER: Hue = Hue {
    line: "#f59e0b",
    fill: "rgba(245, 158, 11, 0.1)",
    solid: "rgba(245, 158, 11, 0.8)",
};
pub(crate) const RED: Hue = Hue {
    line: "#ef4444",
    fill: "rgba(239, 68, 68, 0.1)",
    solid: "rgba(239, 68, 68, 0.8)",
};

/// Slice colours of the acquisition-source donut, in table order.
pub(crate) const SOURCE_PALETTE: [&Hue; 6] = [&BLUE, &SKY, &VIOLET, &GREEN, &AMBER, &RED];

/// `MM-DD` part of a `YYYY-MM-DD` sample date.
pub(crate) fn day_label(date: &str) -> String {
    date.get(5..).unwrap_or(date).to_string()
}

/// Smoothed line series in `hue`.
pub(crate) fn trend(label: &str, values: impl IntoIterator<Item = f64>, hue: &Hue) -> Dataset {
    Dataset::new(label, values)
        .border(hue.line)
        .background(hue.fill)
        .tension(0.3)
}

pub(crate) fn sources_chart(sources: &[SourceBreakdown], label: &str) -> ChartData {
    let colors: Vec<&str> = SOURCE_PALETTE
        .iter()
        .cycle()
        .take(sources.len())
        .map(|hue| hue.solid)
        .collect();

    ChartData::new(
        sources.iter().map(|s| s.source.clone()).collect(),
        vec![Dataset::new(label, sources.iter().map(|s| s.count as f64))
            .background(colors)
            .border_width(1.0)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Paint;
    use crate::core::sources::users_by_source;

    #[test]
    fn day_label_keeps_month_and_day() {
        assert_eq!(day_label("2024-03-09"), "03-09");
        assert_eq!(day_label("bad"), "bad");
    }

    #[test]
    fn source_chart_colours_each_slice() {
        let chart = sources_chart(&users_by_source(), "Users by Source");
        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.datasets[0].data[0], 4235.0);
        match &chart.datasets[0].background_color {
            Some(Paint::PerPoint(colors)) => {
                assert_eq!(colors.len(), 6);
                assert_eq!(colors[0], "rgba(59, 130, 246, 0.8)");
                assert_eq!(colors[5], "rgba(239, 68, 68, 0.8)");
            }
            other => panic!("unexpected paint {other:?}"),
        }
    }
}
