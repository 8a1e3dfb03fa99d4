//! Declarative input validation for every entity the system persists.
//!
//! Inputs arrive as typed structs (deserialized by serde, which applies
//! field defaults); `validate` then runs per-field checks followed by
//! explicit cross-field refinements, accumulating every failure rather
//! than stopping at the first. Validation is pure: re-validating the same
//! value always yields the same result.

pub mod budget;
pub mod document;
pub mod grant;
pub mod grant_year;
pub mod rules;
pub mod search;
pub mod task;
pub mod user;

use std::collections::BTreeMap;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Field-keyed validation failure report. Keys are dotted field paths in
/// the input's wire form (e.g. "endDate", "updates.grantTitle"); each key
/// carries every message recorded against that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error, Diagnostic)]
#[error("{}", self.summary())]
#[diagnostic(
    code(grantdesk::validation),
    help("Correct the listed fields and resubmit")
)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure message against a field path.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Fold another report into this one, prefixing its field paths.
    /// Used for nested inputs (e.g. bulk updates carrying a patch).
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors
                .entry(format!("{prefix}.{field}"))
                .or_default()
                .extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of recorded messages across all fields.
    pub fn message_count(&self) -> usize {
        self.errors.values().map(|v| v.len()).sum()
    }

    /// Messages recorded against one field path.
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Field paths with at least one failure, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(|k| k.as_str())
    }

    /// Ok(()) when no failures were recorded, otherwise the report itself.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = self.errors.len(), "validation failed");
            Err(self)
        }
    }

    fn summary(&self) -> String {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join("; ")))
            .collect();
        format!("validation failed: {}", parts.join(", "))
    }
}

/// Implemented by every input shape the validation engine accepts.
pub trait Validate {
    /// Check the value against its declared rules, reporting every
    /// failing field. Succeeding twice on the same value is guaranteed.
    fn validate(&self) -> Result<(), ValidationErrors>;
}
