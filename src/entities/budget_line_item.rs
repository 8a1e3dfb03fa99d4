use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed federal budget category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetCategory {
    Personnel,
    FringeBenefits,
    Travel,
    Equipment,
    Supplies,
    Contractual,
    TotalDirectCosts,
    IndirectCosts,
    Other,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 9] = [
        BudgetCategory::Personnel,
        BudgetCategory::FringeBenefits,
        BudgetCategory::Travel,
        BudgetCategory::Equipment,
        BudgetCategory::Supplies,
        BudgetCategory::Contractual,
        BudgetCategory::TotalDirectCosts,
        BudgetCategory::IndirectCosts,
        BudgetCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Personnel => "PERSONNEL",
            BudgetCategory::FringeBenefits => "FRINGE_BENEFITS",
            BudgetCategory::Travel => "TRAVEL",
            BudgetCategory::Equipment => "EQUIPMENT",
            BudgetCategory::Supplies => "SUPPLIES",
            BudgetCategory::Contractual => "CONTRACTUAL",
            BudgetCategory::TotalDirectCosts => "TOTAL_DIRECT_COSTS",
            BudgetCategory::IndirectCosts => "INDIRECT_COSTS",
            BudgetCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One categorized budget allocation within a grant year.
///
/// Invariant: actual_spent + encumbered_amount never exceeds 110% of
/// budgeted_amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLineItem {
    pub id: String,
    pub grant_year_id: String,
    pub category: BudgetCategory,
    pub description: String,
    pub budgeted_amount: Decimal,
    pub actual_spent: Decimal,
    pub encumbered_amount: Decimal,
    pub last_updated_by_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
