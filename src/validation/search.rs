//! Search filters and bulk-operation requests over grants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::grant::GrantStatus;
use crate::settings::Settings;
use crate::validation::grant::UpdateGrant;
use crate::validation::rules::{check_id, check_str_len};
use crate::validation::{Validate, ValidationErrors};

/// Grant search filter. Every criterion is optional; an empty filter is
/// a valid "list everything" query. A query that names no `limit` pages
/// at the configured default size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrantSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GrantStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_investigator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl GrantSearch {
    /// Page size the query runs with: the explicit `limit`, or the
    /// configured default when the input omitted one.
    pub fn effective_limit(&self, settings: &Settings) -> u32 {
        self.limit.unwrap_or(settings.search.default_limit)
    }

    /// Check against a specific paging policy.
    pub fn validate_with(&self, settings: &Settings) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(search) = &self.search {
            check_str_len(&mut errors, "search", search, 0, 100, "Search term");
        }
        if let Some(agency) = &self.agency_name {
            check_str_len(&mut errors, "agencyName", agency, 0, 100, "Agency name");
        }
        if let Some(pi) = &self.principal_investigator_id {
            check_id(&mut errors, "principalInvestigatorId", pi, "Invalid PI ID");
        }
        if let (Some(from), Some(to)) = (self.start_date_from, self.start_date_to) {
            if to < from {
                errors.push("startDateTo", "End date must be after start date");
            }
        }
        if let Some(limit) = self.limit {
            if limit < 1 {
                errors.push("limit", "Limit must be at least 1");
            }
            if limit > settings.search.max_limit {
                errors.push(
                    "limit",
                    format!("Limit cannot exceed {}", settings.search.max_limit),
                );
            }
        }
        errors.into_result()
    }
}

impl Validate for GrantSearch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(&Settings::default())
    }
}

/// Bulk update request: one patch applied to a set of grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkUpdateGrants {
    pub grant_ids: Vec<String>,
    pub updates: UpdateGrant,
}

/// Bulk delete request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkDeleteGrants {
    pub grant_ids: Vec<String>,
}

impl BulkUpdateGrants {
    /// Check against a specific bulk-operation policy.
    pub fn validate_with(&self, settings: &Settings) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.grant_ids.is_empty() {
            errors.push("grantIds", "At least one grant ID is required");
        }
        if self.grant_ids.len() > settings.bulk.max_update_ids {
            errors.push(
                "grantIds",
                format!(
                    "Cannot update more than {} grants at once",
                    settings.bulk.max_update_ids
                ),
            );
        }
        for id in &self.grant_ids {
            check_id(&mut errors, "grantIds", id, "Invalid Grant ID");
        }
        if let Err(nested) = self.updates.validate() {
            errors.merge_prefixed("updates", nested);
        }
        errors.into_result()
    }
}

impl Validate for BulkUpdateGrants {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(&Settings::default())
    }
}

impl BulkDeleteGrants {
    pub fn validate_with(&self, settings: &Settings) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.grant_ids.is_empty() {
            errors.push("grantIds", "At least one grant ID is required");
        }
        if self.grant_ids.len() > settings.bulk.max_delete_ids {
            errors.push(
                "grantIds",
                format!(
                    "Cannot delete more than {} grants at once",
                    settings.bulk.max_delete_ids
                ),
            );
        }
        for id in &self.grant_ids {
            check_id(&mut errors, "grantIds", id, "Invalid Grant ID");
        }
        errors.into_result()
    }
}

impl Validate for BulkDeleteGrants {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(&Settings::default())
    }
}
