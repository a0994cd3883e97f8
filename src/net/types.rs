//! Wire types returned by the session endpoint.
//!
//! DESIGN
//! ======
//! `UserRecord` is an immutable server snapshot. The session store replaces it
//! wholesale on every probe and never patches fields in place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role carried by an authenticated principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
}

/// Which roles each role satisfies. Reordering the enum does not change this.
const ROLE_GRANTS: &[(Role, &[Role])] = &[
    (Role::Admin, &[Role::Admin, Role::User, Role::Guest]),
    (Role::User, &[Role::User, Role::Guest]),
    (Role::Guest, &[Role::Guest]),
];

impl Role {
    /// Whether a principal holding `self` satisfies a `required` role.
    #[must_use]
    pub fn grants(self, required: Role) -> bool {
        ROLE_GRANTS
            .iter()
            .find(|(role, _)| *role == self)
            .is_some_and(|(_, granted)| granted.contains(&required))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as returned by `GET <api>/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable user identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    /// Account status as reported by the server (e.g. `"active"`).
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp, passed through verbatim.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp, passed through verbatim.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl UserRecord {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.grants(Role::Admin)
    }
}
