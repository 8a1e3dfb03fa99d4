//! Grant rule set: full-record, create, and partial-update variants.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entities::grant::{Grant, GrantStatus};
use crate::validation::rules::{
    check_id, check_pattern, check_str_len, GRANT_NUMBER_RE, GRANT_TITLE_RE,
};
use crate::validation::{Validate, ValidationErrors};

/// Create-grant input. Server-assigned fields (id, timestamps, current
/// year number) are absent; a free-form description is accepted only at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGrant {
    pub grant_title: String,
    pub grant_number_master: String,
    pub agency_name: String,
    pub principal_investigator_id: String,
    pub created_by_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_years: i32,
    pub status: GrantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for a grant. Every field is optional; the creator
/// reference is immutable and deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_number_master: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_investigator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_year_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GrantStatus>,
}

fn check_title(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "grantTitle", value, 5, 200, "Grant title");
    check_pattern(
        errors,
        "grantTitle",
        value,
        &GRANT_TITLE_RE,
        "Grant title contains invalid characters",
    );
}

fn check_number(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "grantNumberMaster", value, 3, 50, "Grant number");
    check_pattern(
        errors,
        "grantNumberMaster",
        value,
        &GRANT_NUMBER_RE,
        "Grant number must contain only uppercase letters, numbers, and hyphens",
    );
}

fn check_agency(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "agencyName", value, 2, 100, "Agency name");
}

fn check_start_date(errors: &mut ValidationErrors, date: NaiveDate) {
    if date.year() < 2020 {
        errors.push("startDate", "Start date cannot be before 2020");
    }
    if date.year() > 2030 {
        errors.push("startDate", "Start date cannot be after 2030");
    }
}

fn check_end_date(errors: &mut ValidationErrors, date: NaiveDate) {
    if date.year() < 2020 {
        errors.push("endDate", "End date cannot be before 2020");
    }
    if date.year() > 2035 {
        errors.push("endDate", "End date cannot be after 2035");
    }
}

fn check_total_years(errors: &mut ValidationErrors, value: i32) {
    if value < 1 {
        errors.push("totalYears", "Grant must be at least 1 year");
    }
    if value > 5 {
        errors.push("totalYears", "Grant cannot exceed 5 years");
    }
}

fn check_current_year(errors: &mut ValidationErrors, value: i32) {
    if value < 1 {
        errors.push("currentYearNumber", "Current year must be at least 1");
    }
    if value > 5 {
        errors.push("currentYearNumber", "Current year cannot exceed 5");
    }
}

// Cross-field refinements, run after the per-field checks.

fn refine_date_order(errors: &mut ValidationErrors, start: NaiveDate, end: NaiveDate) {
    if end <= start {
        errors.push("endDate", "End date must be after start date");
    }
}

fn refine_year_bound(errors: &mut ValidationErrors, current: i32, total: i32) {
    if current > total {
        errors.push("currentYearNumber", "Current year cannot exceed total years");
    }
}

impl Validate for Grant {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "id", &self.id, "Invalid ID");
        check_title(&mut errors, &self.grant_title);
        check_number(&mut errors, &self.grant_number_master);
        check_agency(&mut errors, &self.agency_name);
        check_id(
            &mut errors,
            "principalInvestigatorId",
            &self.principal_investigator_id,
            "Invalid Principal Investigator ID",
        );
        check_id(&mut errors, "createdById", &self.created_by_id, "Invalid Creator ID");
        check_start_date(&mut errors, self.start_date);
        check_end_date(&mut errors, self.end_date);
        check_total_years(&mut errors, self.total_years);
        check_current_year(&mut errors, self.current_year_number);

        refine_date_order(&mut errors, self.start_date, self.end_date);
        refine_year_bound(&mut errors, self.current_year_number, self.total_years);
        errors.into_result()
    }
}

impl Validate for CreateGrant {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_title(&mut errors, &self.grant_title);
        check_number(&mut errors, &self.grant_number_master);
        check_agency(&mut errors, &self.agency_name);
        check_id(
            &mut errors,
            "principalInvestigatorId",
            &self.principal_investigator_id,
            "Invalid Principal Investigator ID",
        );
        check_id(&mut errors, "createdById", &self.created_by_id, "Invalid Creator ID");
        check_start_date(&mut errors, self.start_date);
        check_end_date(&mut errors, self.end_date);
        check_total_years(&mut errors, self.total_years);
        if let Some(description) = &self.description {
            check_str_len(&mut errors, "description", description, 0, 1000, "Description");
        }

        refine_date_order(&mut errors, self.start_date, self.end_date);
        errors.into_result()
    }
}

impl Validate for UpdateGrant {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &self.grant_title {
            check_title(&mut errors, title);
        }
        if let Some(number) = &self.grant_number_master {
            check_number(&mut errors, number);
        }
        if let Some(agency) = &self.agency_name {
            check_agency(&mut errors, agency);
        }
        if let Some(pi) = &self.principal_investigator_id {
            check_id(
                &mut errors,
                "principalInvestigatorId",
                pi,
                "Invalid Principal Investigator ID",
            );
        }
        if let Some(start) = self.start_date {
            check_start_date(&mut errors, start);
        }
        if let Some(end) = self.end_date {
            check_end_date(&mut errors, end);
        }
        if let Some(total) = self.total_years {
            check_total_years(&mut errors, total);
        }
        if let Some(current) = self.current_year_number {
            check_current_year(&mut errors, current);
        }

        // Cross-field rules apply only when the patch carries both sides;
        // a partial patch is re-validated against the merged record by the
        // calling layer.
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            refine_date_order(&mut errors, start, end);
        }
        if let (Some(current), Some(total)) = (self.current_year_number, self.total_years) {
            refine_year_bound(&mut errors, current, total);
        }
        errors.into_result()
    }
}
