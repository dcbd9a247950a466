//! Chart payloads derived from [`DashboardState`].

use crate::charts::{ChartData, Dataset};
use crate::pages::{day_label, sources_chart, trend, SeriesLabels, AMBER, BLUE, GREEN, RED, SKY, VIOLET};

use super::state::DashboardState;

/// Static January to June revenue comparison.
pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
pub const REVENUE_THIS_YEAR: [f64; 6] = [12500.0, 17800.0, 18400.0, 19300.0, 22560.0, 24200.0];
pub const REVENUE_LAST_YEAR: [f64; 6] = [8600.0, 11200.0, 14300.0, 15700.0, 16900.0, 18100.0];

/// Days shown in the "new users by day" bars.
const RECENT_DAYS: usize = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub user_growth: ChartData,
    pub revenue_trend: ChartData,
    pub engagement: ChartData,
    pub bounce_vs_retention: ChartData,
    pub page_views: ChartData,
    pub sources: ChartData,
    pub recent_new_users: ChartData,
    pub arpu: ChartData,
    pub monthly_revenue: ChartData,
}

impl DashboardCharts {
    pub fn project(state: &DashboardState, labels: &SeriesLabels) -> Self {
        let data = &state.data;

        let user_days: Vec<String> = data.users.iter().map(|m| day_label(&m.date)).collect();
        let revenue_days: Vec<String> = data.revenue.iter().map(|m| day_label(&m.date)).collect();
        let engagement_days: Vec<String> =
            data.engagement.iter().map(|m| day_label(&m.date)).collect();

        let user_growth = ChartData::new(
            user_days.clone(),
            vec![
                trend(&labels.new_users, data.users.iter().map(|m| m.new_users as f64), &BLUE),
                trend(&labels.active_users, data.users.iter().map(|m| m.active_users as f64), &SKY),
            ],
        );

        let revenue_trend = ChartData::new(
            revenue_days.clone(),
            vec![trend(&labels.revenue, data.revenue.iter().map(|m| m.revenue as f64), &GREEN)],
        );

        let engagement = ChartData::new(
            engagement_days.clone(),
            vec![
                trend(
                    &labels.session_duration,
                    data.engagement.iter().map(|m| m.session_duration as f64),
                    &VIOLET,
                ),
                trend(
                    &labels.retention_percent,
                    data.engagement.iter().map(|m| m.retention_rate as f64),
                    &AMBER,
                ),
            ],
        );

        let bounce_vs_retention = ChartData::new(
            engagement_days.clone(),
            vec![
                trend(&labels.bounce_rate, data.engagement.iter().map(|m| m.bounce_rate as f64), &RED),
                trend(
                    &labels.retention_rate,
                    data.engagement.iter().map(|m| m.retention_rate as f64),
                    &GREEN,
                ),
            ],
        );

        let page_views = ChartData::new(
            engagement_days,
            vec![Dataset::new(&labels.page_views, data.engagement.iter().map(|m| m.page_views as f64))
                .background(SKY.solid)
                .border("rgba(14, 165, 233, 1)")
                .border_width(1.0)],
        );

        let recent = &data.users[data.users.len().saturating_sub(RECENT_DAYS)..];
        let recent_new_users = ChartData::new(
            recent.iter().map(|m| day_label(&m.date)).collect(),
            vec![Dataset::new(&labels.new_users, recent.iter().map(|m| m.new_users as f64))
                .background(BLUE.solid)],
        );

        let arpu = ChartData::new(
            revenue_days,
            vec![trend(&labels.arpu, data.revenue.iter().map(|m| m.arpu), &VIOLET)],
        );

        let monthly_revenue = ChartData::new(
            MONTHS.iter().map(|m| m.to_string()).collect(),
            vec![
                Dataset::new(&labels.this_year, REVENUE_THIS_YEAR).background(GREEN.solid),
                Dataset::new(&labels.last_year, REVENUE_LAST_YEAR).background(SKY.solid),
            ],
        );

        Self {
            user_growth,
            revenue_trend,
            engagement,
            bounce_vs_retention,
            page_views,
            sources: sources_chart(&data.sources, &labels.users_by_source),
            recent_new_users,
            arpu,
            monthly_revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time_range::TimeRange;
    use crate::pages::dashboard::state::{reduce, DashboardEvent};
    use rand::{rngs::StdRng, SeedableRng};
    use time::macros::date;

    fn project(range: TimeRange) -> (DashboardState, DashboardCharts) {
        let mut rng = StdRng::seed_from_u64(3);
        let today = date!(2024 - 03 - 10);
        let state = DashboardState::initial(&mut rng, today);
        let state = reduce(&state, DashboardEvent::SelectRange(range), &mut rng, today);
        let charts = DashboardCharts::project(&state, &SeriesLabels::default());
        (state, charts)
    }

    #[test]
    fn labels_are_month_and_day_of_each_sample() {
        let (state, charts) = project(TimeRange::Last7Days);
        assert_eq!(charts.user_growth.labels.len(), 7);
        assert_eq!(charts.user_growth.labels[6], "03-09");
        assert_eq!(charts.revenue_trend.labels, charts.user_growth.labels);
        assert_eq!(
            charts.user_growth.datasets[0].data[0],
            state.data.users[0].new_users as f64
        );
    }

    #[test]
    fn recent_new_users_keep_last_fourteen_days() {
        let (state, charts) = project(TimeRange::Last30Days);
        assert_eq!(charts.recent_new_users.labels.len(), 14);
        assert_eq!(
            charts.recent_new_users.datasets[0].data.last().copied(),
            state.data.users.last().map(|m| m.new_users as f64)
        );

        let (_, week) = project(TimeRange::Last7Days);
        assert_eq!(week.recent_new_users.labels.len(), 7);
    }

    #[test]
    fn monthly_comparison_is_static() {
        let (_, charts) = project(TimeRange::LastYear);
        assert_eq!(charts.monthly_revenue.labels, MONTHS.to_vec());
        assert_eq!(charts.monthly_revenue.datasets[0].label, "This Year");
        assert_eq!(charts.monthly_revenue.datasets[0].data[5], 24200.0);
        assert_eq!(charts.monthly_revenue.datasets[1].data[0], 8600.0);
    }

    #[test]
    fn series_follow_range_length() {
        let (_, charts) = project(TimeRange::Last90Days);
        for chart in [
            &charts.user_growth,
            &charts.revenue_trend,
            &charts.engagement,
            &charts.bounce_vs_retention,
            &charts.page_views,
            &charts.arpu,
        ] {
            assert_eq!(chart.labels.len(), 90);
            assert!(chart.datasets.iter().all(|d| d.data.len() == 90));
        }
        assert_eq!(charts.sources.labels.len(), 6);
    }
}
