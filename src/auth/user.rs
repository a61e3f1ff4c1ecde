//! This file defines a user of the application and its supporting types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The role a user acts under.
///
/// This is a closed enumeration: the serde representation rejects any value
/// outside the three known roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// School staff, limited to day-to-day record keeping.
    Staff,
    /// Finance staff, focused on payments and reporting.
    Accountant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Accountant => "accountant",
        };

        write!(f, "{label}")
    }
}

/// A user of the application.
///
/// This is exactly the record persisted to the session store, so it carries no
/// password: passwords only exist on the credential fixture
/// ([crate::auth::Credential]) and are never written out.
///
/// Field names serialize in camelCase to match the session entry format the
/// application has always stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque string ID.
    pub id: String,
    /// The name used to log in.
    pub username: String,
    /// The user's email address.
    pub email: String,
    /// The user's role.
    pub role: Role,
    /// The user's display name.
    pub name: String,
}
