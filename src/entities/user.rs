use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GrantsError;

/// Role held by a user. Fixed per session; role changes are an external
/// administrative action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Pi,
    Finance,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Pi, Role::Finance, Role::Viewer];

    /// Wire/storage tag, e.g. "ADMIN".
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Pi => "PI",
            Role::Finance => "FINANCE",
            Role::Viewer => "VIEWER",
        }
    }

    /// Human-readable role name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Pi => "Principal Investigator",
            Role::Finance => "Finance Officer",
            Role::Viewer => "Viewer",
        }
    }

    /// Short description of what the role can do.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Full system access with user management capabilities",
            Role::Pi => "Can create and manage their own grants and budgets",
            Role::Finance => "Can view and approve budgets across all grants",
            Role::Viewer => "Read-only access to grants, budgets, and reports",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = GrantsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "PI" => Ok(Role::Pi),
            "FINANCE" => Ok(Role::Finance),
            "VIEWER" => Ok(Role::Viewer),
            other => Err(GrantsError::UnknownRole(other.to_string())),
        }
    }
}

/// A known user of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
