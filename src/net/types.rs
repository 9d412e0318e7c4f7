//! Wire DTOs for the Artware Club backend.
//!
//! DESIGN
//! ======
//! These types mirror the server payloads so serde round-trips stay lossless.
//! Cells are backend-owned records; the client only deserializes the fields
//! it renders and treats mutation responses as opaque JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role attached to a user profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Identity and display attributes of the signed-in user.
///
/// Replaced wholesale on every login/registration; cleared together with the
/// bearer token on logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned user identifier (opaque string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Permission level (`admin` or `member`).
    #[serde(default)]
    pub role: Role,
    /// Optional avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Success body of the login and registration endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSuccess {
    /// Opaque bearer token for subsequent authenticated calls.
    pub token: String,
    /// Profile of the authenticated user.
    pub user: UserProfile,
}

/// Registration form payload for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A cell (club group) a member can join or leave.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Server-assigned cell identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional description shown on cell cards.
    #[serde(default)]
    pub description: Option<String>,
}
