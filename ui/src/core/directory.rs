//! Static directory of recently active users.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub join_date: String,
    pub last_active: String,
    pub status: UserStatus,
}

impl UserRecord {
    fn new(
        id: &str,
        name: &str,
        email: &str,
        join_date: &str,
        last_active: &str,
        status: UserStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            join_date: join_date.into(),
            last_active: last_active.into(),
            status,
        }
    }

    /// Avatar letter.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub fn recent_users() -> Vec<UserRecord> {
    use UserStatus::{Active, Inactive};

    vec![
        UserRecord::new("1", "Alex Johnson", "alex@example.com", "2023-10-15", "2023-10-28", Active),
        UserRecord::new("2", "Sarah Miller", "sarah@example.com", "2023-10-18", "2023-10-27", Active),
        UserRecord::new("3", "David Wilson", "david@example.com", "2023-10-20", "2023-10-25", Inactive),
        UserRecord::new("4", "Jessica Brown", "jessica@example.com", "2023-10-22", "2023-10-28", Active),
    ]
}

/// Case-insensitive match on name or email; a blank term keeps every user.
pub fn filter_users(users: &[UserRecord], term: &str) -> Vec<UserRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return users.to_vec();
    }

    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_keeps_everyone() {
        assert_eq!(filter_users(&recent_users(), "  ").len(), 4);
    }

    #[test]
    fn search_matches_name_or_email_ignoring_case() {
        let users = recent_users();
        let by_name = filter_users(&users, "MILLER");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "2");

        let by_email = filter_users(&users, "jessica@");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Jessica Brown");

        assert!(filter_users(&users, "nobody").is_empty());
    }

    #[test]
    fn initial_is_first_letter() {
        assert_eq!(recent_users()[2].initial(), "D");
    }
}
