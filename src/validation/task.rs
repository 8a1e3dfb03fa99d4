//! Task rule set. The task status machine (PENDING -> IN_PROGRESS ->
//! {COMPLETED, CANCELLED}) is enforced only through static refinements:
//! a completed task needs a completion timestamp, and a task past its
//! due date must already sit in a terminal status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::task::{Task, TaskPriority, TaskStatus};
use crate::validation::rules::{check_id, check_str_len};
use crate::validation::{Validate, ValidationErrors};

/// Create input for a task. The completion timestamp is server-assigned
/// on transition and absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub grant_year_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_by_id: String,
}

/// Partial update for a task. The owning grant year and creator are
/// immutable and absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

fn check_title(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "title", value, 5, 200, "Task title");
}

fn check_description(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "description", value, 0, 1000, "Task description");
}

fn refine_completion(
    errors: &mut ValidationErrors,
    status: TaskStatus,
    completed_at: Option<DateTime<Utc>>,
) {
    if status == TaskStatus::Completed && completed_at.is_none() {
        errors.push("completedAt", "Completed tasks must have a completion date");
    }
}

fn refine_overdue(
    errors: &mut ValidationErrors,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) {
    if let Some(due) = due_date {
        if due < now && !status.is_terminal() {
            errors.push("status", "Overdue tasks must be completed or cancelled");
        }
    }
}

impl Task {
    /// Validate against an explicit clock, so the overdue rule is
    /// deterministic under test.
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "id", &self.id, "Invalid ID");
        check_id(&mut errors, "grantYearId", &self.grant_year_id, "Invalid Grant Year ID");
        check_title(&mut errors, &self.title);
        if let Some(description) = &self.description {
            check_description(&mut errors, description);
        }
        if let Some(assignee) = &self.assigned_to_id {
            check_id(&mut errors, "assignedToId", assignee, "Invalid User ID");
        }
        check_id(&mut errors, "createdById", &self.created_by_id, "Invalid User ID");

        refine_completion(&mut errors, self.status, self.completed_at);
        refine_overdue(&mut errors, self.status, self.due_date, now);
        errors.into_result()
    }
}

impl Validate for Task {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_at(Utc::now())
    }
}

impl CreateTask {
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "grantYearId", &self.grant_year_id, "Invalid Grant Year ID");
        check_title(&mut errors, &self.title);
        if let Some(description) = &self.description {
            check_description(&mut errors, description);
        }
        if let Some(assignee) = &self.assigned_to_id {
            check_id(&mut errors, "assignedToId", assignee, "Invalid User ID");
        }
        check_id(&mut errors, "createdById", &self.created_by_id, "Invalid User ID");

        // A freshly created task has no completion timestamp, so it can
        // never legitimately start out COMPLETED.
        refine_completion(&mut errors, self.status, None);
        refine_overdue(&mut errors, self.status, self.due_date, now);
        errors.into_result()
    }
}

impl Validate for CreateTask {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_at(Utc::now())
    }
}

impl Validate for UpdateTask {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &self.title {
            check_title(&mut errors, title);
        }
        if let Some(description) = &self.description {
            check_description(&mut errors, description);
        }
        if let Some(assignee) = &self.assigned_to_id {
            check_id(&mut errors, "assignedToId", assignee, "Invalid User ID");
        }
        // Status/date refinements need the merged record; the calling
        // layer re-validates the full task after applying the patch.
        errors.into_result()
    }
}
