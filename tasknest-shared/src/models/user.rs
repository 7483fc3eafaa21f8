//! # User Model
//!
//! Account records. Registration and credential handling happen in the
//! external auth service that issues our tokens; this crate only reads
//! profiles and applies profile updates.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     username VARCHAR(255) NOT NULL UNIQUE,
//!     password_hash VARCHAR(255) NOT NULL,
//!     email VARCHAR(255),
//!     full_name VARCHAR(255),
//!     bio TEXT,
//!     profile_image VARCHAR(512),
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
//!     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user record as stored.
///
/// The password hash is part of the row but is excluded from
/// serialization, so a `User` can be returned from a handler without
/// ever exposing credential material.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Credential hash owned by the auth service. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    /// URL of the profile picture
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile update input.
///
/// Like task updates, profile updates replace the editable fields
/// wholesale: an absent field clears the stored value. Username and
/// password are not editable through the profile.
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            email: Some("ada@example.com".to_string()),
            full_name: None,
            bio: None,
            profile_image: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "ada");
    }
}
