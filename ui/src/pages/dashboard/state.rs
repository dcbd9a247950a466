//! Dashboard view state and its reducer.

use rand::Rng;
use time::Date;
use tracing::debug;

use crate::core::kpi::{kpi_summaries, KpiSummary};
use crate::core::metrics::{
    engagement_metrics, revenue_metrics, user_metrics, EngagementMetric, RevenueMetric, UserMetric,
};
use crate::core::sources::{users_by_source, SourceBreakdown};
use crate::core::time_range::{sample_window, DateRange, TimeRange};

/// Range selected when the dashboard first opens.
pub const DEFAULT_RANGE: TimeRange = TimeRange::Last30Days;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Overview,
    Users,
    Revenue,
    Engagement,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Users,
        DashboardTab::Revenue,
        DashboardTab::Engagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Users => "users",
            DashboardTab::Revenue => "revenue",
            DashboardTab::Engagement => "engagement",
        }
    }
}

/// Every series the dashboard renders, regenerated together.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub kpis: Vec<KpiSummary>,
    pub users: Vec<UserMetric>,
    pub revenue: Vec<RevenueMetric>,
    pub engagement: Vec<EngagementMetric>,
    pub sources: Vec<SourceBreakdown>,
}

impl DashboardData {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        range: TimeRange,
        custom: Option<DateRange>,
        today: Date,
    ) -> Self {
        let (days, until) = sample_window(range, custom, today);
        Self {
            kpis: kpi_summaries(range),
            users: user_metrics(rng, days, until),
            revenue: revenue_metrics(rng, days, until),
            engagement: engagement_metrics(rng, days, until),
            sources: users_by_source(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub time_range: TimeRange,
    pub custom_bounds: Option<DateRange>,
    pub data: DashboardData,
}

impl DashboardState {
    pub fn initial<R: Rng + ?Sized>(rng: &mut R, today: Date) -> Self {
        Self {
            active_tab: DashboardTab::default(),
            time_range: DEFAULT_RANGE,
            custom_bounds: None,
            data: DashboardData::generate(rng, DEFAULT_RANGE, None, today),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardEvent {
    SelectTab(DashboardTab),
    SelectRange(TimeRange),
    SetCustomBounds(DateRange),
}

/// Next state after `event`. Only range changes touch the random source.
pub fn reduce<R: Rng + ?Sized>(
    state: &DashboardState,
    event: DashboardEvent,
    rng: &mut R,
    today: Date,
) -> DashboardState {
    match event {
        DashboardEvent::SelectTab(tab) => DashboardState {
            active_tab: tab,
            ..state.clone()
        },
        DashboardEvent::SelectRange(range) => {
            debug!(range = %range, "regenerating dashboard series");
            DashboardState {
                time_range: range,
                data: DashboardData::generate(rng, range, state.custom_bounds, today),
                ..state.clone()
            }
        }
        DashboardEvent::SetCustomBounds(bounds) => {
            let custom_bounds = Some(bounds);
            if state.time_range != TimeRange::Custom {
                return DashboardState {
                    custom_bounds,
                    ..state.clone()
                };
            }
            debug!(days = bounds.day_count(), "regenerating dashboard series for custom bounds");
            DashboardState {
                custom_bounds,
                data: DashboardData::generate(rng, TimeRange::Custom, custom_bounds, today),
                ..state.clone()
            }
        }
    }
}
