use crate::t;

/// Series names shown in chart legends and tooltips.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLabels {
    pub new_users: String,
    pub active_users: String,
    pub total_users: String,
    pub revenue: String,
    pub arpu: String,
    pub session_duration: String,
    pub retention_percent: String,
    pub bounce_rate: String,
    pub retention_rate: String,
    pub page_views: String,
    pub users_by_source: String,
    pub this_year: String,
    pub last_year: String,
}

impl Default for SeriesLabels {
    fn default() -> Self {
        Self {
            new_users: "New Users".into(),
            active_users: "Active Users".into(),
            total_users: "Total Users".into(),
            revenue: "Revenue".into(),
            arpu: "ARPU".into(),
            session_duration: "Session Duration (sec)".into(),
            retention_percent: "Retention Rate (%)".into(),
            bounce_rate: "Bounce Rate".into(),
            retention_rate: "Retention Rate".into(),
            page_views: "Page Views".into(),
            users_by_source: "Users by Source".into(),
            this_year: "This Year".into(),
            last_year: "Last Year".into(),
        }
    }
}

impl SeriesLabels {
    /// Labels in the active UI language.
    pub fn localized() -> Self {
        Self {
            new_users: t!("series-new-users"),
            active_users: t!("series-active-users"),
            total_users: t!("series-total-users"),
            revenue: t!("series-revenue"),
            arpu: t!("series-arpu"),
            session_duration: t!("series-session-duration"),
            retention_percent: t!("series-retention-percent"),
            bounce_rate: t!("series-bounce-rate"),
            retention_rate: t!("series-retention-rate"),
            page_views: t!("series-page-views"),
            users_by_source: t!("series-users-by-source"),
            this_year: t!("series-this-year"),
            last_year: t!("series-last-year"),
        }
    }
}
