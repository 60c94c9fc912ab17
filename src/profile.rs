use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of roles the client understands. Parsed at the pipeline
/// boundary; a payload carrying any other role string fails deserialization,
/// so downstream code never handles an unknown role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-facing view of the signed-in user. Immutable for the lifetime
/// of a session; a role change requires signing in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Canonical shape of a successful login/register payload. The wire spells
/// the display name as either `fullName` or `name` depending on endpoint; the
/// alias folds both into one field here so no caller ever sees the split.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: String,
    #[serde(rename = "fullName", alias = "name")]
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl AuthResponse {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}
