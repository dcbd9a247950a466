//! User analytics: signup trends, acquisition sources and a searchable
//! directory of recent users.

mod charts;
mod state;
mod view;

pub use charts::UsersCharts;
pub use state::{reduce, UsersEvent, UsersState};
pub use view::UsersView;
