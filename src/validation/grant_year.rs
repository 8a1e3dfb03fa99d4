//! Grant-year rule set.

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::grant_year::{GrantYear, GrantYearStatus};
use crate::validation::rules::{check_currency, check_id};
use crate::validation::{Validate, ValidationErrors};

static MAX_AWARD_AMOUNT: LazyLock<Decimal> = LazyLock::new(|| Decimal::new(50_000_000, 0));

/// Create input for one funding year within a grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGrantYear {
    pub grant_id: String,
    pub year_number: i32,
    pub award_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: GrantYearStatus,
}

/// Partial update for a grant year. The owning grant reference is
/// immutable and absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateGrantYear {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GrantYearStatus>,
}

fn check_year_number(errors: &mut ValidationErrors, value: i32) {
    if value < 1 {
        errors.push("yearNumber", "Year number must be at least 1");
    }
    if value > 5 {
        errors.push("yearNumber", "Year number cannot exceed 5");
    }
}

fn check_award(errors: &mut ValidationErrors, amount: Decimal) {
    check_currency(
        errors,
        "awardAmount",
        amount,
        *MAX_AWARD_AMOUNT,
        "Award amount",
        "$50,000,000",
    );
}

fn refine_date_order(errors: &mut ValidationErrors, start: NaiveDate, end: NaiveDate) {
    if end <= start {
        errors.push("endDate", "End date must be after start date");
    }
}

impl Validate for GrantYear {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "id", &self.id, "Invalid ID");
        check_id(&mut errors, "grantId", &self.grant_id, "Invalid Grant ID");
        check_year_number(&mut errors, self.year_number);
        check_award(&mut errors, self.award_amount);
        refine_date_order(&mut errors, self.start_date, self.end_date);
        errors.into_result()
    }
}

impl Validate for CreateGrantYear {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "grantId", &self.grant_id, "Invalid Grant ID");
        check_year_number(&mut errors, self.year_number);
        check_award(&mut errors, self.award_amount);
        refine_date_order(&mut errors, self.start_date, self.end_date);
        errors.into_result()
    }
}

impl Validate for UpdateGrantYear {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(year) = self.year_number {
            check_year_number(&mut errors, year);
        }
        if let Some(amount) = self.award_amount {
            check_award(&mut errors, amount);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            refine_date_order(&mut errors, start, end);
        }
        errors.into_result()
    }
}
