//! Acquisition source breakdown over a fixed table of raw counts.

use serde::{Deserialize, Serialize};

use super::metrics::round_to;

/// Raw signup counts per acquisition channel.
pub const SOURCE_COUNTS: &[(&str, u64)] = &[
    ("Organic Search", 4235),
    ("Direct", 2018),
    ("Referral", 1642),
    ("Social Media", 1280),
    ("Email", 768),
    ("Other", 412),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub source: String,
    pub count: u64,
    pub percentage: f64,
}

/// Share of each source rounded to one decimal. The rounded shares are not
/// rebalanced, so their sum may drift from 100 by a few tenths.
pub fn breakdown(table: &[(&str, u64)]) -> Vec<SourceBreakdown> {
    let total: u64 = table.iter().map(|(_, count)| count).sum();

    table
        .iter()
        .map(|(source, count)| SourceBreakdown {
            source: (*source).to_string(),
            count: *count,
            percentage: if total == 0 {
                0.0
            } else {
                round_to(*count as f64 / total as f64 * 100.0, 1)
            },
        })
        .collect()
}

pub fn users_by_source() -> Vec<SourceBreakdown> {
    breakdown(SOURCE_COUNTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_round_to_one_decimal() {
        let sources = users_by_source();
        let shares: Vec<f64> = sources.iter().map(|s| s.percentage).collect();
        assert_eq!(shares, vec![40.9, 19.5, 15.9, 12.4, 7.4, 4.0]);
    }

    #[test]
    fn shares_sum_to_roughly_one_hundred() {
        let sum: f64 = users_by_source().iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.1 * SOURCE_COUNTS.len() as f64 / 2.0);
    }

    #[test]
    fn recomputation_is_stable() {
        assert_eq!(users_by_source(), users_by_source());
    }

    #[test]
    fn empty_totals_yield_zero_shares() {
        let sources = breakdown(&[("Direct", 0), ("Email", 0)]);
        assert!(sources.iter().all(|s| s.percentage == 0.0));
    }
}
