//! Test-data builders. Each builder starts from a fully valid record and
//! lets a test override just the fields under scrutiny.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use grantdesk::entities::budget_line_item::{BudgetCategory, BudgetLineItem};
use grantdesk::entities::grant::{Grant, GrantStatus};
use grantdesk::entities::task::{Task, TaskPriority, TaskStatus};

pub fn usd(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub struct GrantBuilder {
    grant: Grant,
}

impl GrantBuilder {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            grant: Grant {
                id: "grant-1".into(),
                grant_title: "Quantum Sensing for Climate Observation".into(),
                grant_number_master: "NSF-2024-0042".into(),
                agency_name: "National Science Foundation".into(),
                principal_investigator_id: "pi-1".into(),
                created_by_id: "admin-1".into(),
                start_date: date(2024, 1, 1),
                end_date: date(2026, 12, 31),
                total_years: 3,
                current_year_number: 1,
                status: GrantStatus::Active,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.grant.id = id.into();
        self
    }

    pub fn with_pi(mut self, pi_id: &str) -> Self {
        self.grant.principal_investigator_id = pi_id.into();
        self
    }

    pub fn with_status(mut self, status: GrantStatus) -> Self {
        self.grant.status = status;
        self
    }

    pub fn build(self) -> Grant {
        self.grant
    }
}

pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            task: Task {
                id: "task-1".into(),
                grant_year_id: "gy-1".into(),
                title: "Submit annual progress report".into(),
                description: None,
                status: TaskStatus::Pending,
                priority: TaskPriority::Medium,
                assigned_to_id: None,
                due_date: None,
                completed_at: None,
                created_by_id: "pi-1".into(),
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.task.due_date = Some(due);
        self
    }

    pub fn with_completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.task.completed_at = Some(at);
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

pub struct BudgetLineItemBuilder {
    item: BudgetLineItem,
}

impl BudgetLineItemBuilder {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            item: BudgetLineItem {
                id: "bli-1".into(),
                grant_year_id: "gy-1".into(),
                category: BudgetCategory::Personnel,
                description: "Graduate research assistant salaries".into(),
                budgeted_amount: usd("100000.00"),
                actual_spent: Decimal::ZERO,
                encumbered_amount: Decimal::ZERO,
                last_updated_by_id: None,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn with_amounts(mut self, budgeted: &str, actual: &str, encumbered: &str) -> Self {
        self.item.budgeted_amount = usd(budgeted);
        self.item.actual_spent = usd(actual);
        self.item.encumbered_amount = usd(encumbered);
        self
    }

    pub fn build(self) -> BudgetLineItem {
        self.item
    }
}
