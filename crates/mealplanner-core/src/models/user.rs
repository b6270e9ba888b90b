// ABOUTME: User account model with credentials and embedded biometric profile
// ABOUTME: Password hash is never serialized into API responses

use super::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier
    pub id: Uuid,
    /// Unique login name, used as the token subject
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Optional display name (empty when not provided)
    pub full_name: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Biometric profile
    #[serde(flatten)]
    pub profile: Profile,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and timestamps
    #[must_use]
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        password_hash: String,
        profile: Profile,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            full_name,
            password_hash,
            profile,
            created_at: now,
            updated_at: now,
        }
    }
}
