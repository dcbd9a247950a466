//! Synthetic business metrics built from random-walk series.

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::Date;

use super::generator::date_window;

/// Walk parameters for every generated series.
pub mod profiles {
    use crate::core::generator::SeriesProfile;

    pub const NEW_USERS: SeriesProfile = SeriesProfile::new(120.0, 40.0, 2.0);
    pub const ACTIVE_USERS: SeriesProfile = SeriesProfile::new(2500.0, 300.0, 30.0);
    pub const REVENUE: SeriesProfile = SeriesProfile::new(15000.0, 3000.0, 200.0);
    pub const SUBSCRIPTIONS: SeriesProfile = SeriesProfile::new(800.0, 100.0, 10.0);
    pub const SESSION_DURATION: SeriesProfile = SeriesProfile::new(180.0, 20.0, 0.5);
    pub const PAGE_VIEWS: SeriesProfile = SeriesProfile::new(12000.0, 2000.0, 100.0);
    pub const BOUNCE_RATE: SeriesProfile = SeriesProfile::new(35.0, 5.0, -0.1);
    pub const RETENTION_RATE: SeriesProfile = SeriesProfile::new(60.0, 8.0, 0.2);

    /// Starting point of the cumulative user count.
    pub const BASE_TOTAL_USERS: u64 = 10_000;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetric {
    pub date: String,
    pub new_users: u64,
    pub active_users: u64,
    pub total_users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueMetric {
    pub date: String,
    pub revenue: u64,
    pub subscriptions: u64,
    pub arpu: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementMetric {
    pub date: String,
    pub session_duration: u64,
    pub page_views: u64,
    pub bounce_rate: u64,
    pub retention_rate: u64,
}

/// Daily user counts for the `days` before `until`.
pub fn user_metrics<R: Rng + ?Sized>(rng: &mut R, days: usize, until: Date) -> Vec<UserMetric> {
    let dates = date_window(days, until);
    let new_users = profiles::NEW_USERS.generate(rng, days);
    let active_users = profiles::ACTIVE_USERS.generate(rng, days);
    let totals = cumulative_totals(&new_users, profiles::BASE_TOTAL_USERS);

    dates
        .into_iter()
        .zip(new_users)
        .zip(active_users)
        .zip(totals)
        .map(|(((date, new_users), active_users), total_users)| UserMetric {
            date,
            new_users,
            active_users,
            total_users,
        })
        .collect()
}

pub fn revenue_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    days: usize,
    until: Date,
) -> Vec<RevenueMetric> {
    let dates = date_window(days, until);
    let revenue = profiles::REVENUE.generate(rng, days);
    let subscriptions = profiles::SUBSCRIPTIONS.generate(rng, days);

    dates
        .into_iter()
        .zip(revenue)
        .zip(subscriptions)
        .map(|((date, revenue), subscriptions)| RevenueMetric {
            date,
            revenue,
            subscriptions,
            arpu: arpu(revenue, subscriptions),
        })
        .collect()
}

pub fn engagement_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    days: usize,
    until: Date,
) -> Vec<EngagementMetric> {
    let dates = date_window(days, until);
    let session_duration = profiles::SESSION_DURATION.generate(rng, days);
    let page_views = profiles::PAGE_VIEWS.generate(rng, days);
    let bounce_rate = clamp_rates(profiles::BOUNCE_RATE.generate(rng, days));
    let retention_rate = clamp_rates(profiles::RETENTION_RATE.generate(rng, days));

    dates
        .into_iter()
        .zip(session_duration)
        .zip(page_views)
        .zip(bounce_rate)
        .zip(retention_rate)
        .map(
            |((((date, session_duration), page_views), bounce_rate), retention_rate)| {
                EngagementMetric {
                    date,
                    session_duration,
                    page_views,
                    bounce_rate,
                    retention_rate,
                }
            },
        )
        .collect()
}

/// Running total where each day shows the count before that day's signups.
pub fn cumulative_totals(new_users: &[u64], base: u64) -> Vec<u64> {
    let mut total = base;
    new_users
        .iter()
        .map(|added| {
            let current = total;
            total = total.saturating_add(*added);
            current
        })
        .collect()
}

/// Revenue per subscription rounded half-up to cents; zero subscriptions
/// yield `0.0`. Cents are computed on the exact integer ratio.
pub fn arpu(revenue: u64, subscriptions: u64) -> f64 {
    if subscriptions == 0 {
        return 0.0;
    }
    let numerator = u128::from(revenue) * 200 + u128::from(subscriptions);
    let cents = numerator / (u128::from(subscriptions) * 2);
    cents as f64 / 100.0
}

fn clamp_rates(values: Vec<u64>) -> Vec<u64> {
    values.into_iter().map(|v| v.min(100)).collect()
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use time::macros::date;

    const UNTIL: Date = date!(2024 - 06 - 15);

    #[test]
    fn totals_start_at_base_and_lag_one_day() {
        assert_eq!(cumulative_totals(&[5, 7, 3], 10_000), vec![10_000, 10_005, 10_012]);
        assert!(cumulative_totals(&[], 10_000).is_empty());
    }

    #[test]
    fn arpu_guards_zero_subscriptions() {
        assert_eq!(arpu(1_000, 0), 0.0);
        assert_eq!(arpu(1_000, 3), 333.33);
        assert_eq!(arpu(15_000, 800), 18.75);
        assert_eq!(arpu(34_830, 2_000), 17.42);
        assert_eq!(arpu(1, 8), 0.13);
    }

    #[test]
    fn arpu_stays_within_half_a_cent_on_known_seed() {
        let mut rng = StdRng::seed_from_u64(12_513_791_431_967_830_913);
        for sample in revenue_metrics(&mut rng, 210, UNTIL) {
            if sample.subscriptions > 0 {
                let expected = sample.revenue as f64 / sample.subscriptions as f64;
                assert!((sample.arpu - expected).abs() <= 0.005 + 1e-9);
            }
        }
    }

    #[test]
    fn series_share_the_date_window() {
        let mut rng = StdRng::seed_from_u64(3);
        let users = user_metrics(&mut rng, 7, UNTIL);
        let dates: Vec<_> = users.iter().map(|m| m.date.as_str()).collect();
        assert_eq!(dates.first(), Some(&"2024-06-08"));
        assert_eq!(dates.last(), Some(&"2024-06-14"));
    }

    #[test]
    fn zero_days_produces_no_metrics() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(user_metrics(&mut rng, 0, UNTIL).is_empty());
        assert!(revenue_metrics(&mut rng, 0, UNTIL).is_empty());
        assert!(engagement_metrics(&mut rng, 0, UNTIL).is_empty());
    }

    proptest! {
        #[test]
        fn series_have_requested_length_and_bounded_steps(
            seed in any::<u64>(),
            days in 0usize..400,
            base in 0.0f64..20_000.0,
            volatility in 0.0f64..5_000.0,
            trend in -300.0f64..300.0,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = crate::core::generator::generate_series(&mut rng, days, base, volatility, trend);
            prop_assert_eq!(series.len(), days);

            // Rounding on both ends can add up to one unit per step.
            let max_step = volatility / 2.0 + trend.abs() + 1.0;
            for pair in series.windows(2) {
                let delta = (pair[1] as f64 - pair[0] as f64).abs();
                prop_assert!(delta <= max_step, "step {} exceeds {}", delta, max_step);
            }
        }

        #[test]
        fn total_users_never_decrease(seed in any::<u64>(), days in 0usize..400) {
            let mut rng = StdRng::seed_from_u64(seed);
            let users = user_metrics(&mut rng, days, UNTIL);
            prop_assert_eq!(users.len(), days);
            if let Some(first) = users.first() {
                prop_assert_eq!(first.total_users, profiles::BASE_TOTAL_USERS);
            }
            for pair in users.windows(2) {
                prop_assert!(pair[1].total_users >= pair[0].total_users);
                prop_assert_eq!(pair[1].total_users, pair[0].total_users + pair[0].new_users);
            }
        }

        #[test]
        fn arpu_matches_revenue_over_subscriptions(seed in any::<u64>(), days in 0usize..400) {
            let mut rng = StdRng::seed_from_u64(seed);
            for sample in revenue_metrics(&mut rng, days, UNTIL) {
                if sample.subscriptions > 0 {
                    let expected = sample.revenue as f64 / sample.subscriptions as f64;
                    prop_assert!((sample.arpu - expected).abs() <= 0.005 + 1e-9);
                } else {
                    prop_assert_eq!(sample.arpu, 0.0);
                }
            }
        }

        #[test]
        fn engagement_rates_stay_in_percent_bounds(seed in any::<u64>(), days in 0usize..400) {
            let mut rng = StdRng::seed_from_u64(seed);
            let samples = engagement_metrics(&mut rng, days, UNTIL);
            prop_assert_eq!(samples.len(), days);
            for sample in samples {
                prop_assert!(sample.bounce_rate <= 100);
                prop_assert!(sample.retention_rate <= 100);
            }
        }
    }
}
