//! User model
//!
//! Users of the CMS and the lightweight `Author` reference that pages,
//! media and links embed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author reference embedded in content records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Author {
    /// The acting user while no authentication exists.
    pub fn current_user() -> Self {
        Self {
            id: "user-1".to_string(),
            name: "Current User".to_string(),
            email: "user@example.com".to_string(),
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::current_user()
    }
}

/// Role given to accounts that do not name one
pub const DEFAULT_ROLE: &str = "user";

/// User account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// User role (`admin`, `editor`, `user`, ...)
    #[serde(default = "default_role")]
    pub role: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last successful login
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    /// Account status
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn default_status() -> String {
    "active".to_string()
}

impl User {
    /// The placeholder account behind [`Author::current_user`].
    pub fn current() -> Self {
        let author = Author::current_user();
        Self {
            id: author.id,
            name: author.name,
            email: author.email,
            role: "admin".to_string(),
            avatar_url: None,
            created_at: Utc::now(),
            last_login: None,
            status: default_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_from_minimal_json() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-9",
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .unwrap();

        assert_eq!(user.role, DEFAULT_ROLE);
        assert_eq!(user.status, "active");
        assert!(user.avatar_url.is_none());
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_any_role_and_status_are_accepted() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-2",
            "name": "Grace",
            "email": "grace@example.com",
            "role": "moderator",
            "status": "suspended"
        }))
        .unwrap();

        assert_eq!(user.role, "moderator");
        assert_eq!(user.status, "suspended");
    }

    #[test]
    fn test_current_user_matches_placeholder_author() {
        let user = User::current();
        let author = Author::current_user();
        assert_eq!(user.id, author.id);
        assert_eq!(user.email, author.email);
        assert_eq!(user.role, "admin");
    }
}
