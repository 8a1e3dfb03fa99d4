use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrantStatus {
    Draft,
    Active,
    Closed,
    NotAwarded,
}

impl GrantStatus {
    pub const ALL: [GrantStatus; 4] = [
        GrantStatus::Draft,
        GrantStatus::Active,
        GrantStatus::Closed,
        GrantStatus::NotAwarded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrantStatus::Draft => "DRAFT",
            GrantStatus::Active => "ACTIVE",
            GrantStatus::Closed => "CLOSED",
            GrantStatus::NotAwarded => "NOT_AWARDED",
        }
    }
}

impl fmt::Display for GrantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multi-year funded award. Owns its grant years, which in turn own
/// budget line items, documents, and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub id: String,
    pub grant_title: String,
    /// Unique master grant number: uppercase letters, digits, hyphens.
    pub grant_number_master: String,
    pub agency_name: String,
    pub principal_investigator_id: String,
    pub created_by_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Total funding years, 1-5.
    pub total_years: i32,
    /// Current funding year, never greater than `total_years`.
    pub current_year_number: i32,
    pub status: GrantStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
