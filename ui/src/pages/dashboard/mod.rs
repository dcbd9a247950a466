//! Analytics dashboard: KPI cards and tabbed chart panels over one
//! generated data set.

mod charts;
mod state;
mod view;

pub use charts::{DashboardCharts, MONTHS, REVENUE_LAST_YEAR, REVENUE_THIS_YEAR};
pub use state::{
    reduce, DashboardData, DashboardEvent, DashboardState, DashboardTab, DEFAULT_RANGE,
};
pub use view::DashboardView;
