use crate::charts::ChartData;
use crate::pages::{day_label, sources_chart, trend, SeriesLabels, BLUE, SKY, VIOLET};

use super::state::UsersState;

#[derive(Debug, Clone, PartialEq)]
pub struct UsersCharts {
    pub signups: ChartData,
    pub active: ChartData,
    pub total_growth: ChartData,
    pub sources: ChartData,
}

impl UsersCharts {
    pub fn project(state: &UsersState, labels: &SeriesLabels) -> Self {
        let days: Vec<String> = state.metrics.iter().map(|m| day_label(&m.date)).collect();
        let series = |pick: fn(&crate::core::metrics::UserMetric) -> u64| {
            state.metrics.iter().map(move |m| pick(m) as f64)
        };

        Self {
            signups: ChartData::new(
                days.clone(),
                vec![trend(&labels.new_users, series(|m| m.new_users), &BLUE)],
            ),
            active: ChartData::new(
                days.clone(),
                vec![trend(&labels.active_users, series(|m| m.active_users), &SKY)],
            ),
            total_growth: ChartData::new(
                days,
                vec![trend(&labels.total_users, series(|m| m.total_users), &VIOLET).fill(true)],
            ),
            sources: sources_chart(&state.sources, &labels.users_by_source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use time::macros::date;

    #[test]
    fn total_growth_series_is_filled() {
        let state = UsersState::initial(&mut StdRng::seed_from_u64(9), date!(2024 - 03 - 10));
        let charts = UsersCharts::project(&state, &SeriesLabels::default());

        assert_eq!(charts.total_growth.datasets[0].fill, Some(true));
        assert_eq!(charts.signups.datasets[0].fill, None);
        assert_eq!(charts.total_growth.datasets[0].data[0], 10_000.0);
        assert_eq!(charts.active.labels.len(), 30);
        assert_eq!(charts.sources.datasets[0].label, "Users by Source");
    }
}
