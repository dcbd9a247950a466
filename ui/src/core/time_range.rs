//! Time-range selection: tags, calendar resolution and comparison labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{macros::format_description, Date, Duration};

/// Change label used when no concrete range applies.
pub const PREVIOUS_PERIOD_LABEL: &str = "vs previous period";

/// Longest custom window, in days, that the generators will produce.
pub const MAX_CUSTOM_DAYS: usize = 3 * 365;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
    #[serde(rename = "custom")]
    Custom,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
        TimeRange::LastYear,
        TimeRange::Custom,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
            TimeRange::Last90Days => "90d",
            TimeRange::LastYear => "1y",
            TimeRange::Custom => "custom",
        }
    }

    /// Number of daily samples generated for the range.
    pub fn days(&self) -> usize {
        match self {
            TimeRange::Last7Days => 7,
            TimeRange::Last30Days => 30,
            TimeRange::Last90Days => 90,
            TimeRange::LastYear => 365,
            TimeRange::Custom => 30,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TimeRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.tag() == s)
            .ok_or_else(|| RangeError::UnknownTag(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("unknown time range `{0}`")]
    UnknownTag(String),
    #[error("a custom range needs explicit start and end dates")]
    MissingCustomBounds,
    #[error("range start {start} is after its end {end}")]
    Inverted { start: Date, end: Date },
    #[error("a custom range may span at most {max} days, got {days}")]
    TooLong { days: usize, max: usize },
}

/// Inclusive calendar bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        let range = Self { start, end };
        let days = range.day_count();
        if days > MAX_CUSTOM_DAYS {
            return Err(RangeError::TooLong {
                days,
                max: MAX_CUSTOM_DAYS,
            });
        }
        Ok(range)
    }

    /// Days covered, counting both ends.
    pub fn day_count(&self) -> usize {
        ((self.end - self.start).whole_days() + 1) as usize
    }
}

/// Concrete dates for a range ending `today`. Custom ranges only resolve to
/// the bounds the caller supplies.
pub fn resolve_date_range(
    range: TimeRange,
    today: Date,
    custom: Option<DateRange>,
) -> Result<DateRange, RangeError> {
    let start = match range {
        TimeRange::Last7Days => today - Duration::days(7),
        TimeRange::Last30Days => today - Duration::days(30),
        TimeRange::Last90Days => today - Duration::days(90),
        TimeRange::LastYear => one_year_before(today),
        TimeRange::Custom => {
            let bounds = custom.ok_or(RangeError::MissingCustomBounds)?;
            return DateRange::new(bounds.start, bounds.end);
        }
    };
    DateRange::new(start, today)
}

fn one_year_before(date: Date) -> Date {
    let year = date.year() - 1;
    Date::from_calendar_date(year, date.month(), date.day())
        .or_else(|_| Date::from_calendar_date(year, date.month(), date.day() - 1))
        .unwrap_or(date - Duration::days(365))
}

/// Sample count and exclusive end day of the series generated for `range`.
///
/// Fixed ranges end yesterday. A custom range with bounds covers the bounds
/// inclusively, keeping at most the last [`MAX_CUSTOM_DAYS`]; without bounds
/// it falls back to the range's default length.
pub fn sample_window(range: TimeRange, custom: Option<DateRange>, today: Date) -> (usize, Date) {
    match (range, custom) {
        (TimeRange::Custom, Some(bounds)) => {
            let until = bounds.end.next_day().unwrap_or(bounds.end);
            (bounds.day_count().min(MAX_CUSTOM_DAYS), until)
        }
        _ => (range.days(), today),
    }
}

/// Comparison phrase shown under each KPI.
pub fn format_change_label(range: TimeRange) -> &'static str {
    match range {
        TimeRange::Last7Days => "vs previous 7 days",
        TimeRange::Last30Days => "vs previous 30 days",
        TimeRange::Last90Days => "vs previous 90 days",
        TimeRange::LastYear => "vs previous year",
        TimeRange::Custom => PREVIOUS_PERIOD_LABEL,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelInterval {
    Day,
    Week,
    Month,
}

impl LabelInterval {
    fn step(&self) -> Duration {
        match self {
            LabelInterval::Day => Duration::days(1),
            LabelInterval::Week => Duration::days(7),
            LabelInterval::Month => Duration::days(30),
        }
    }
}

/// `MMM DD` labels from `start` up to and including `end`.
pub fn date_labels(start: Date, end: Date, interval: LabelInterval) -> Vec<String> {
    let mut labels = Vec::new();
    let mut current = start;
    while current <= end {
        labels.push(format_short_date(current));
        match current.checked_add(interval.step()) {
            Some(next) => current = next,
            None => break,
        }
    }
    labels
}

/// `Mar 05, 2024`
pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[month repr:short] [day], [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// `Mar 05`
pub fn format_short_date(date: Date) -> String {
    date.format(&format_description!("[month repr:short] [day]"))
        .unwrap_or_else(|_| date.to_string())
}
