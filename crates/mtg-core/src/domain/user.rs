//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,

    #[validate(length(min = 1, max = 30, message = "Username must be between 1 and 30 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email"))]
    #[validate(length(max = 254, message = "Email too long"))]
    pub email: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user; `password_hash` must already be hashed.
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
            created_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }
}
