use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of document attached to a grant year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Proposal,
    Report,
    Budget,
    Correspondence,
    Contract,
    Invoice,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        DocumentType::Proposal,
        DocumentType::Report,
        DocumentType::Budget,
        DocumentType::Correspondence,
        DocumentType::Contract,
        DocumentType::Invoice,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Proposal => "PROPOSAL",
            DocumentType::Report => "REPORT",
            DocumentType::Budget => "BUDGET",
            DocumentType::Correspondence => "CORRESPONDENCE",
            DocumentType::Contract => "CONTRACT",
            DocumentType::Invoice => "INVOICE",
            DocumentType::Other => "OTHER",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File metadata for a document stored against a grant year. The file
/// bytes themselves live in external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub grant_year_id: String,
    pub file_name: String,
    pub original_name: String,
    /// Size in bytes.
    pub file_size: u64,
    pub mime_type: String,
    pub document_type: DocumentType,
    pub uploaded_by_id: String,
    pub uploaded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
