//! Random-walk trend generator and calendar windows for synthetic series.

use rand::Rng;
use time::{macros::format_description, Date, Duration, OffsetDateTime};

/// Walk parameters for one synthetic series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesProfile {
    pub base: f64,
    pub volatility: f64,
    pub trend: f64,
}

impl SeriesProfile {
    pub const fn new(base: f64, volatility: f64, trend: f64) -> Self {
        Self {
            base,
            volatility,
            trend,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, days: usize) -> Vec<u64> {
        generate_series(rng, days, self.base, self.volatility, self.trend)
    }
}

/// Produce `days` samples of a random walk seeded at `base_value`.
///
/// Each step adds uniform noise in `[-volatility/2, volatility/2)` plus the
/// constant `trend`, floors the walk at zero and emits the rounded value. The
/// walk itself keeps its fractional part between steps.
pub fn generate_series<R: Rng + ?Sized>(
    rng: &mut R,
    days: usize,
    base_value: f64,
    volatility: f64,
    trend: f64,
) -> Vec<u64> {
    let mut value = base_value.max(0.0);
    let mut samples = Vec::with_capacity(days);

    for _ in 0..days {
        let noise = (rng.gen::<f64>() - 0.5) * volatility;
        value = (value + noise + trend).max(0.0);
        samples.push(value.round() as u64);
    }

    samples
}

/// `days` consecutive `YYYY-MM-DD` labels covering `[until - days, until - 1]`.
pub fn date_window(days: usize, until: Date) -> Vec<String> {
    let mut current = until - Duration::days(days as i64);
    let mut labels = Vec::with_capacity(days);

    for _ in 0..days {
        labels.push(iso_day(current));
        current = current.next_day().unwrap_or(current);
    }

    labels
}

/// Window of `days` labels ending yesterday.
pub fn date_range(days: usize) -> Vec<String> {
    date_window(days, today())
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn iso_day(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use time::macros::date;

    #[test]
    fn zero_days_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_series(&mut rng, 0, 100.0, 10.0, 1.0).is_empty());
        assert!(date_window(0, date!(2024 - 03 - 01)).is_empty());
    }

    #[test]
    fn flat_walk_without_volatility_follows_trend() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_series(&mut rng, 4, 10.0, 0.0, 2.0);
        assert_eq!(series, vec![12, 14, 16, 18]);
    }

    #[test]
    fn walk_floors_at_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_series(&mut rng, 5, 3.0, 0.0, -2.0);
        assert_eq!(series, vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn same_seed_same_series() {
        let a = generate_series(&mut StdRng::seed_from_u64(42), 30, 2500.0, 300.0, 30.0);
        let b = generate_series(&mut StdRng::seed_from_u64(42), 30, 2500.0, 300.0, 30.0);
        assert_eq!(a, b);
    }

    #[test]
    fn window_ends_the_day_before_until() {
        let labels = date_window(3, date!(2024 - 03 - 01));
        assert_eq!(labels, vec!["2024-02-27", "2024-02-28", "2024-02-29"]);
    }

    #[test]
    fn date_range_has_requested_length() {
        let labels = date_range(30);
        assert_eq!(labels.len(), 30);
        assert_eq!(labels.last().cloned(), Some(iso_day(today() - Duration::days(1))));
    }
}
