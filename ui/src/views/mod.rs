mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;
