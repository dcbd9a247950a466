//! Headline KPI summaries shown as cards.

use serde::{Deserialize, Serialize};

use super::format::{format_number, NumberFormat};
use super::metrics::RevenueMetric;
use super::time_range::{format_change_label, TimeRange, PREVIOUS_PERIOD_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Increase,
    Decrease,
}

/// Which headline metric a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KpiKind {
    TotalUsers,
    ActiveUsers,
    Revenue,
    RetentionRate,
    ConversionRate,
    BounceRate,
    Subscriptions,
    Arpu,
}

impl KpiKind {
    /// English card title.
    pub fn title(&self) -> &'static str {
        match self {
            KpiKind::TotalUsers => "Total Users",
            KpiKind::ActiveUsers => "Active Users",
            KpiKind::Revenue => "Revenue",
            KpiKind::RetentionRate => "Retention Rate",
            KpiKind::ConversionRate => "Conversion Rate",
            KpiKind::BounceRate => "Bounce Rate",
            KpiKind::Subscriptions => "Subscriptions",
            KpiKind::Arpu => "ARPU",
        }
    }
}

/// Accent used for the card's progress bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}

impl ColorTag {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ColorTag::Primary => "primary",
            ColorTag::Secondary => "secondary",
            ColorTag::Accent => "accent",
            ColorTag::Success => "success",
            ColorTag::Warning => "warning",
            ColorTag::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub kind: KpiKind,
    pub title: String,
    pub value: f64,
    /// Period-over-period change in percent.
    pub change: f64,
    pub change_type: ChangeType,
    /// Range the change is measured against; `None` means the previous period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compared_to: Option<TimeRange>,
    pub change_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default)]
    pub color: ColorTag,
}

impl KpiSummary {
    fn new(
        kind: KpiKind,
        value: f64,
        change: f64,
        change_type: ChangeType,
        compared_to: Option<TimeRange>,
    ) -> Self {
        let change_label = compared_to
            .map(format_change_label)
            .unwrap_or(PREVIOUS_PERIOD_LABEL);
        Self {
            kind,
            title: kind.title().to_string(),
            value,
            change,
            change_type,
            compared_to,
            change_label: change_label.to_string(),
            prefix: None,
            suffix: None,
            color: ColorTag::Primary,
        }
    }

    fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    fn suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }

    fn color(mut self, color: ColorTag) -> Self {
        self.color = color;
        self
    }

    /// Headline value with its prefix/suffix. Whole numbers drop decimals,
    /// money keeps cents and other fractions keep one decimal.
    pub fn display_value(&self) -> String {
        let decimals = if self.value.fract() == 0.0 {
            0
        } else if self.prefix.as_deref() == Some("$") {
            2
        } else {
            1
        };

        format_number(
            self.value,
            &NumberFormat {
                prefix: self.prefix.as_deref().unwrap_or_default(),
                suffix: self.suffix.as_deref().unwrap_or_default(),
                decimals,
                ..NumberFormat::default()
            },
        )
    }

    /// Width of the change bar in percent (twice the change, capped at 100).
    pub fn bar_width(&self) -> f64 {
        (self.change * 2.0).clamp(0.0, 100.0)
    }
}

/// The six headline KPIs, labelled for the selected range.
pub fn kpi_summaries(range: TimeRange) -> Vec<KpiSummary> {
    use ChangeType::{Decrease, Increase};

    let range = Some(range);
    vec![
        KpiSummary::new(KpiKind::TotalUsers, 12548.0, 12.4, Increase, range),
        KpiSummary::new(KpiKind::ActiveUsers, 3254.0, 8.2, Increase, range)
            .color(ColorTag::Secondary),
        KpiSummary::new(KpiKind::Revenue, 42569.0, 23.1, Increase, range)
            .prefix("$")
            .color(ColorTag::Success),
        KpiSummary::new(KpiKind::RetentionRate, 68.7, 5.3, Increase, range)
            .suffix("%")
            .color(ColorTag::Accent),
        KpiSummary::new(KpiKind::ConversionRate, 3.2, 0.8, Increase, range)
            .suffix("%")
            .color(ColorTag::Warning),
        KpiSummary::new(KpiKind::BounceRate, 32.5, 2.1, Decrease, range)
            .suffix("%")
            .color(ColorTag::Error),
    ]
}

/// Subscriptions and ARPU cards derived from the latest revenue sample.
pub fn revenue_summaries(revenue: &[RevenueMetric]) -> [KpiSummary; 2] {
    let (subscriptions, arpu) = revenue
        .last()
        .map(|latest| (latest.subscriptions as f64, latest.arpu))
        .unwrap_or((0.0, 0.0));

    [
        KpiSummary::new(KpiKind::Subscriptions, subscriptions, 8.7, ChangeType::Increase, None)
            .color(ColorTag::Secondary),
        KpiSummary::new(KpiKind::Arpu, arpu, 12.3, ChangeType::Increase, None)
            .prefix("$")
            .color(ColorTag::Accent),
    ]
}
