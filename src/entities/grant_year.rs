use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status of a single funding year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrantYearStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

impl GrantYearStatus {
    pub const ALL: [GrantYearStatus; 4] = [
        GrantYearStatus::Planned,
        GrantYearStatus::Active,
        GrantYearStatus::Completed,
        GrantYearStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrantYearStatus::Planned => "PLANNED",
            GrantYearStatus::Active => "ACTIVE",
            GrantYearStatus::Completed => "COMPLETED",
            GrantYearStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for GrantYearStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One funding year within a grant's lifetime, with its own award amount
/// and budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantYear {
    pub id: String,
    pub grant_id: String,
    /// Year number within the grant, 1-5.
    pub year_number: i32,
    pub award_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: GrantYearStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
