//! Document metadata rule set, plus the upload-intent check run before
//! any file transfer is accepted.

use serde::{Deserialize, Serialize};

use crate::entities::document::{Document, DocumentType};
use crate::settings::Settings;
use crate::validation::rules::{check_id, check_pattern, check_str_len, FILE_NAME_RE, MIME_TYPE_RE};
use crate::validation::{Validate, ValidationErrors};

const MAX_STORED_FILE_SIZE: u64 = 100_000_000;

/// Create input for a document record (metadata only; bytes are handled
/// by external storage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument {
    pub grant_year_id: String,
    pub file_name: String,
    pub original_name: String,
    pub file_size: u64,
    pub mime_type: String,
    pub document_type: DocumentType,
    pub uploaded_by_id: String,
}

/// Partial update for a document. Ownership and upload provenance
/// (grant year, uploader, upload time) are immutable and absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
}

/// Upload intent, validated against the configured acceptance policy
/// before a transfer begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    pub grant_year_id: String,
    pub file_name: String,
    pub file_size: u64,
    pub mime_type: String,
    pub document_type: DocumentType,
}

fn check_file_name(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "fileName", value, 1, 255, "File name");
    check_pattern(
        errors,
        "fileName",
        value,
        &FILE_NAME_RE,
        "Invalid file name format",
    );
}

fn check_original_name(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "originalName", value, 1, 255, "Original name");
}

fn check_file_size(errors: &mut ValidationErrors, size: u64) {
    if size < 1 {
        errors.push("fileSize", "File size must be at least 1 byte");
    }
    if size > MAX_STORED_FILE_SIZE {
        errors.push("fileSize", "File size cannot exceed 100MB");
    }
}

fn check_mime_type(errors: &mut ValidationErrors, value: &str) {
    check_pattern(errors, "mimeType", value, &MIME_TYPE_RE, "Invalid MIME type");
    if value.is_empty() {
        errors.push("mimeType", "Invalid MIME type");
    }
}

impl Validate for Document {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "id", &self.id, "Invalid ID");
        check_id(&mut errors, "grantYearId", &self.grant_year_id, "Invalid Grant Year ID");
        check_file_name(&mut errors, &self.file_name);
        check_original_name(&mut errors, &self.original_name);
        check_file_size(&mut errors, self.file_size);
        check_mime_type(&mut errors, &self.mime_type);
        check_id(&mut errors, "uploadedById", &self.uploaded_by_id, "Invalid User ID");
        errors.into_result()
    }
}

impl Validate for CreateDocument {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "grantYearId", &self.grant_year_id, "Invalid Grant Year ID");
        check_file_name(&mut errors, &self.file_name);
        check_original_name(&mut errors, &self.original_name);
        check_file_size(&mut errors, self.file_size);
        check_mime_type(&mut errors, &self.mime_type);
        check_id(&mut errors, "uploadedById", &self.uploaded_by_id, "Invalid User ID");
        errors.into_result()
    }
}

impl Validate for UpdateDocument {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(file_name) = &self.file_name {
            check_file_name(&mut errors, file_name);
        }
        if let Some(original_name) = &self.original_name {
            check_original_name(&mut errors, original_name);
        }
        if let Some(size) = self.file_size {
            check_file_size(&mut errors, size);
        }
        if let Some(mime_type) = &self.mime_type {
            check_mime_type(&mut errors, mime_type);
        }
        errors.into_result()
    }
}

impl DocumentUpload {
    /// Check the upload intent against a specific acceptance policy.
    pub fn validate_with(&self, settings: &Settings) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "grantYearId", &self.grant_year_id, "Invalid Grant Year ID");
        check_file_name(&mut errors, &self.file_name);

        if !settings.mime_type_allowed(&self.mime_type) {
            errors.push("file", "File type not allowed");
        }
        if self.file_size == 0 {
            errors.push("file", "File is required");
        } else if self.file_size > settings.max_file_size_bytes() {
            errors.push(
                "file",
                format!(
                    "File size cannot exceed {}MB",
                    settings.uploads.max_file_size_mb
                ),
            );
        }
        errors.into_result()
    }
}

impl Validate for DocumentUpload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateDocument {
        CreateDocument {
            grant_year_id: "gy-1".into(),
            file_name: "annual_report_2024.pdf".into(),
            original_name: "Annual Report 2024.pdf".into(),
            file_size: 2_048_576,
            mime_type: "application/pdf".into(),
            document_type: DocumentType::Report,
            uploaded_by_id: "pi-1".into(),
        }
    }

    fn valid_upload() -> DocumentUpload {
        DocumentUpload {
            grant_year_id: "gy-1".into(),
            file_name: "annual_report_2024.pdf".into(),
            file_size: 2_048_576,
            mime_type: "application/pdf".into(),
            document_type: DocumentType::Report,
        }
    }

    #[test]
    fn test_valid_document() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_empty_file_name() {
        let mut input = valid_create();
        input.file_name = "".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.field("fileName"), &["File name is required".to_string()]);
    }

    #[test]
    fn test_file_name_without_extension() {
        let mut input = valid_create();
        input.file_name = "no-extension".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.field("fileName"),
            &["Invalid file name format".to_string()]
        );
    }

    #[test]
    fn test_file_size_bounds() {
        let mut input = valid_create();
        input.file_size = 0;
        let errors = input.validate().unwrap_err();
        assert!(errors.field("fileSize")[0].contains("at least 1 byte"));

        input.file_size = 100_000_001;
        let errors = input.validate().unwrap_err();
        assert!(errors.field("fileSize")[0].contains("cannot exceed 100MB"));
    }

    #[test]
    fn test_bad_mime_type() {
        let mut input = valid_create();
        input.mime_type = "notamime".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.field("mimeType"), &["Invalid MIME type".to_string()]);
    }

    #[test]
    fn test_upload_allowed() {
        assert!(valid_upload().validate().is_ok());
    }

    #[test]
    fn test_upload_disallowed_type() {
        let mut upload = valid_upload();
        upload.mime_type = "application/x-msdownload".into();
        let errors = upload.validate().unwrap_err();
        assert_eq!(errors.field("file"), &["File type not allowed".to_string()]);
    }

    #[test]
    fn test_upload_over_size_policy() {
        let mut upload = valid_upload();
        upload.file_size = 51 * 1024 * 1024;
        let errors = upload.validate().unwrap_err();
        assert_eq!(
            errors.field("file"),
            &["File size cannot exceed 50MB".to_string()]
        );
    }

    #[test]
    fn test_upload_with_custom_policy() {
        let mut settings = Settings::default();
        settings.uploads.max_file_size_mb = 100;
        settings
            .uploads
            .allowed_mime_types
            .push("application/zip".to_string());

        let mut upload = valid_upload();
        upload.mime_type = "application/zip".into();
        upload.file_size = 80 * 1024 * 1024;
        assert!(upload.validate_with(&settings).is_ok());
    }

    #[test]
    fn test_update_partial() {
        let patch = UpdateDocument {
            document_type: Some(DocumentType::Contract),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = UpdateDocument {
            file_name: Some("bad/name.pdf".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
