//! Budget line item rule set, including the 110% over-commitment cap.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::budget_line_item::{BudgetCategory, BudgetLineItem};
use crate::validation::rules::{check_currency, check_id, check_str_len};
use crate::validation::{Validate, ValidationErrors};

static MAX_BUDGET_AMOUNT: LazyLock<Decimal> = LazyLock::new(|| Decimal::new(10_000_000, 0));

/// Spent + encumbered may run ahead of budget by at most 10%.
static OVERRUN_RATIO: LazyLock<Decimal> = LazyLock::new(|| Decimal::new(110, 2));

/// Create input for a budget line item. Spent and encumbered amounts
/// default to zero for a fresh line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetLineItem {
    pub grant_year_id: String,
    pub category: BudgetCategory,
    pub description: String,
    pub budgeted_amount: Decimal,
    #[serde(default)]
    pub actual_spent: Decimal,
    #[serde(default)]
    pub encumbered_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by_id: Option<String>,
}

/// Partial update for a budget line item. The owning grant year is
/// immutable and absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBudgetLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BudgetCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budgeted_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_spent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encumbered_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by_id: Option<String>,
}

fn check_description(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "description", value, 5, 500, "Description");
}

fn check_amount(errors: &mut ValidationErrors, field: &str, amount: Decimal, label: &str) {
    check_currency(
        errors,
        field,
        amount,
        *MAX_BUDGET_AMOUNT,
        label,
        "$10,000,000",
    );
}

/// Commitment cap: actual + encumbered must stay within 110% of budgeted.
/// Reported against `actualSpent`, matching the field the caller most
/// often needs to correct.
fn refine_commitment_cap(
    errors: &mut ValidationErrors,
    budgeted: Decimal,
    actual: Decimal,
    encumbered: Decimal,
) {
    if actual + encumbered > budgeted * *OVERRUN_RATIO {
        errors.push(
            "actualSpent",
            "Total spent and encumbered cannot exceed 110% of budgeted amount",
        );
    }
}

impl Validate for BudgetLineItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "id", &self.id, "Invalid ID");
        check_id(&mut errors, "grantYearId", &self.grant_year_id, "Invalid Grant Year ID");
        check_description(&mut errors, &self.description);
        check_amount(&mut errors, "budgetedAmount", self.budgeted_amount, "Budgeted amount");
        check_amount(&mut errors, "actualSpent", self.actual_spent, "Actual spent");
        check_amount(
            &mut errors,
            "encumberedAmount",
            self.encumbered_amount,
            "Encumbered amount",
        );
        if let Some(updated_by) = &self.last_updated_by_id {
            check_id(&mut errors, "lastUpdatedById", updated_by, "Invalid User ID");
        }
        refine_commitment_cap(
            &mut errors,
            self.budgeted_amount,
            self.actual_spent,
            self.encumbered_amount,
        );
        errors.into_result()
    }
}

impl Validate for CreateBudgetLineItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "grantYearId", &self.grant_year_id, "Invalid Grant Year ID");
        check_description(&mut errors, &self.description);
        check_amount(&mut errors, "budgetedAmount", self.budgeted_amount, "Budgeted amount");
        check_amount(&mut errors, "actualSpent", self.actual_spent, "Actual spent");
        check_amount(
            &mut errors,
            "encumberedAmount",
            self.encumbered_amount,
            "Encumbered amount",
        );
        if let Some(updated_by) = &self.last_updated_by_id {
            check_id(&mut errors, "lastUpdatedById", updated_by, "Invalid User ID");
        }
        refine_commitment_cap(
            &mut errors,
            self.budgeted_amount,
            self.actual_spent,
            self.encumbered_amount,
        );
        errors.into_result()
    }
}

impl Validate for UpdateBudgetLineItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(description) = &self.description {
            check_description(&mut errors, description);
        }
        if let Some(amount) = self.budgeted_amount {
            check_amount(&mut errors, "budgetedAmount", amount, "Budgeted amount");
        }
        if let Some(amount) = self.actual_spent {
            check_amount(&mut errors, "actualSpent", amount, "Actual spent");
        }
        if let Some(amount) = self.encumbered_amount {
            check_amount(&mut errors, "encumberedAmount", amount, "Encumbered amount");
        }
        if let Some(updated_by) = &self.last_updated_by_id {
            check_id(&mut errors, "lastUpdatedById", updated_by, "Invalid User ID");
        }
        if let (Some(budgeted), Some(actual), Some(encumbered)) = (
            self.budgeted_amount,
            self.actual_spent,
            self.encumbered_amount,
        ) {
            refine_commitment_cap(&mut errors, budgeted, actual, encumbered);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn usd(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_create() -> CreateBudgetLineItem {
        CreateBudgetLineItem {
            grant_year_id: "gy-1".into(),
            category: BudgetCategory::Personnel,
            description: "Graduate research assistant salaries".into(),
            budgeted_amount: usd("100000.00"),
            actual_spent: Decimal::ZERO,
            encumbered_amount: Decimal::ZERO,
            last_updated_by_id: None,
        }
    }

    #[test]
    fn test_valid_line_item() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_commitment_over_cap() {
        // 80k + 40k = 120k against a 110k ceiling (110% of 100k).
        let mut input = valid_create();
        input.actual_spent = usd("80000");
        input.encumbered_amount = usd("40000");
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.field("actualSpent"),
            &["Total spent and encumbered cannot exceed 110% of budgeted amount".to_string()]
        );
    }

    #[test]
    fn test_commitment_exactly_at_cap() {
        let mut input = valid_create();
        input.actual_spent = usd("80000");
        input.encumbered_amount = usd("30000");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_budget() {
        let mut input = valid_create();
        input.budgeted_amount = usd("-1000");
        let errors = input.validate().unwrap_err();
        assert!(errors
            .field("budgetedAmount")
            .iter()
            .any(|m| m.contains("cannot be negative")));
    }

    #[test]
    fn test_short_description() {
        let mut input = valid_create();
        input.description = "abc".into();
        let errors = input.validate().unwrap_err();
        assert!(errors.field("description")[0].contains("at least 5 characters"));
    }

    #[test]
    fn test_serde_defaults_spent_to_zero() {
        let json = r#"{
            "grantYearId": "gy-1",
            "category": "TRAVEL",
            "description": "Conference travel for project staff",
            "budgetedAmount": "15000.00"
        }"#;
        let input: CreateBudgetLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(input.actual_spent, Decimal::ZERO);
        assert_eq!(input.encumbered_amount, Decimal::ZERO);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_update_cap_checked_when_all_amounts_present() {
        let patch = UpdateBudgetLineItem {
            budgeted_amount: Some(usd("100000")),
            actual_spent: Some(usd("90000")),
            encumbered_amount: Some(usd("30000")),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        // A lone amount change cannot be judged against the cap here.
        let patch = UpdateBudgetLineItem {
            actual_spent: Some(usd("90000")),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
    }
}
