use rand::Rng;
use time::Date;
use tracing::debug;

use crate::core::directory::{filter_users, recent_users, UserRecord};
use crate::core::metrics::{user_metrics, UserMetric};
use crate::core::sources::{users_by_source, SourceBreakdown};
use crate::core::time_range::{sample_window, DateRange, TimeRange};

#[derive(Debug, Clone, PartialEq)]
pub struct UsersState {
    pub time_range: TimeRange,
    pub custom_bounds: Option<DateRange>,
    pub metrics: Vec<UserMetric>,
    pub sources: Vec<SourceBreakdown>,
    pub users: Vec<UserRecord>,
    pub search: String,
}

impl UsersState {
    pub fn initial<R: Rng + ?Sized>(rng: &mut R, today: Date) -> Self {
        let time_range = TimeRange::Last30Days;
        let (days, until) = sample_window(time_range, None, today);
        Self {
            time_range,
            custom_bounds: None,
            metrics: user_metrics(rng, days, until),
            sources: users_by_source(),
            users: recent_users(),
            search: String::new(),
        }
    }

    /// Directory rows matching the current search term.
    pub fn visible_users(&self) -> Vec<UserRecord> {
        filter_users(&self.users, &self.search)
    }

    fn regenerate<R: Rng + ?Sized>(&self, rng: &mut R, range: TimeRange, today: Date) -> Vec<UserMetric> {
        let (days, until) = sample_window(range, self.custom_bounds, today);
        debug!(range = %range, days, "regenerating user metrics");
        user_metrics(rng, days, until)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UsersEvent {
    SelectRange(TimeRange),
    SetCustomBounds(DateRange),
    Search(String),
}

pub fn reduce<R: Rng + ?Sized>(
    state: &UsersState,
    event: UsersEvent,
    rng: &mut R,
    today: Date,
) -> UsersState {
    match event {
        UsersEvent::SelectRange(range) => UsersState {
            time_range: range,
            metrics: state.regenerate(rng, range, today),
            ..state.clone()
        },
        UsersEvent::SetCustomBounds(bounds) => {
            let next = UsersState {
                custom_bounds: Some(bounds),
                ..state.clone()
            };
            if next.time_range != TimeRange::Custom {
                return next;
            }
            UsersState {
                metrics: next.regenerate(rng, TimeRange::Custom, today),
                ..next
            }
        }
        UsersEvent::Search(term) => UsersState {
            search: term,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use time::macros::date;

    const TODAY: Date = date!(2024 - 03 - 10);

    #[test]
    fn starts_with_thirty_days_and_everyone_visible() {
        let state = UsersState::initial(&mut StdRng::seed_from_u64(5), TODAY);
        assert_eq!(state.metrics.len(), 30);
        assert_eq!(state.search, "");
        assert_eq!(state.visible_users().len(), 4);
    }

    #[test]
    fn range_change_regenerates_metrics_only() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = UsersState::initial(&mut rng, TODAY);
        let state = reduce(&state, UsersEvent::Search("sarah".into()), &mut rng, TODAY);
        let next = reduce(&state, UsersEvent::SelectRange(TimeRange::Last7Days), &mut rng, TODAY);

        assert_eq!(next.metrics.len(), 7);
        assert_eq!(next.search, "sarah");
        assert_eq!(next.sources, state.sources);
    }

    #[test]
    fn search_filters_without_regenerating() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = UsersState::initial(&mut rng, TODAY);
        let next = reduce(&state, UsersEvent::Search("EXAMPLE.COM".into()), &mut rng, TODAY);
        assert_eq!(next.metrics, state.metrics);
        assert_eq!(next.visible_users().len(), 4);

        let next = reduce(&next, UsersEvent::Search("wilson".into()), &mut rng, TODAY);
        let names: Vec<String> = next.visible_users().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["David Wilson"]);
    }

    #[test]
    fn custom_bounds_apply_once_custom_is_selected() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = UsersState::initial(&mut rng, TODAY);
        let bounds = DateRange::new(date!(2024 - 02 - 01), date!(2024 - 02 - 05)).unwrap();

        let custom = reduce(&state, UsersEvent::SelectRange(TimeRange::Custom), &mut rng, TODAY);
        assert_eq!(custom.metrics.len(), 30);

        let bounded = reduce(&custom, UsersEvent::SetCustomBounds(bounds), &mut rng, TODAY);
        assert_eq!(bounded.metrics.len(), 5);
        assert_eq!(bounded.metrics[0].date, "2024-02-01");
    }
}
