use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::auth::schema::UserResponse;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub auth_provider: String,
}

impl User {
    pub fn new(id: i64, username: String, auth_provider: String) -> Self {
        Self {
            id,
            username,
            created_at: Utc::now(),
            auth_provider,
        }
    }

    pub fn local(id: i64, username: String) -> Self {
        Self::new(id, username, "local".to_string())
    }

    pub fn google(id: i64, username: String) -> Self {
        Self::new(id, username, "google".to_string())
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
            auth_provider: user.auth_provider,
        }
    }
}
