use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::GrantsError;

/// Deployment-tunable validation knobs. Hard invariants (amount
/// ceilings, the 110% budget cap, year counts) are fixed in the rule
/// sets; only policies an operator may legitimately vary live here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    pub uploads: Uploads,
    pub search: Search,
    pub bulk: Bulk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Uploads {
    /// Largest accepted upload, in megabytes.
    pub max_file_size_mb: u64,
    /// MIME types accepted for document uploads.
    pub allowed_mime_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Search {
    /// Page size when a query does not name one.
    pub default_limit: u32,
    /// Largest page size a query may request.
    pub max_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bulk {
    /// Most grants one bulk update may touch.
    pub max_update_ids: usize,
    /// Most grants one bulk delete may touch.
    pub max_delete_ids: usize,
}

impl Default for Uploads {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
            allowed_mime_types: vec![
                "application/pdf".to_string(),
                "application/msword".to_string(),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
                "application/vnd.ms-excel".to_string(),
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
                "text/plain".to_string(),
                "image/jpeg".to_string(),
                "image/png".to_string(),
            ],
        }
    }
}

impl Default for Search {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 100,
        }
    }
}

impl Default for Bulk {
    fn default() -> Self {
        Self {
            max_update_ids: 50,
            max_delete_ids: 20,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> Result<Self, GrantsError> {
        let defaults = Settings::default();
        let mut builder = config::Config::builder()
            .set_default("uploads.max_file_size_mb", defaults.uploads.max_file_size_mb)?
            .set_default(
                "uploads.allowed_mime_types",
                defaults.uploads.allowed_mime_types.clone(),
            )?
            .set_default("search.default_limit", defaults.search.default_limit as u64)?
            .set_default("search.max_limit", defaults.search.max_limit as u64)?
            .set_default("bulk.max_update_ids", defaults.bulk.max_update_ids as u64)?
            .set_default("bulk.max_delete_ids", defaults.bulk.max_delete_ids as u64)?;

        // Optional file
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment overrides: GRANTDESK__UPLOADS__MAX_FILE_SIZE_MB=100, etc.
        builder = builder.add_source(config::Environment::with_prefix("GRANTDESK").separator("__"));

        let cfg = builder.build()?;
        let s: Settings = cfg.try_deserialize()?;
        Ok(s)
    }

    /// Upload ceiling in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.uploads.max_file_size_mb * 1024 * 1024
    }

    pub fn mime_type_allowed(&self, mime_type: &str) -> bool {
        self.uploads
            .allowed_mime_types
            .iter()
            .any(|allowed| allowed == mime_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_settings_load_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nonexistent.toml");

        // Load settings with nonexistent file - should use defaults
        let settings =
            Settings::load(config_path.to_str().unwrap()).expect("Failed to load settings");

        assert_eq!(settings.uploads.max_file_size_mb, 50);
        assert!(settings.mime_type_allowed("application/pdf"));
        assert!(!settings.mime_type_allowed("application/x-msdownload"));
        assert_eq!(settings.search.default_limit, 50);
        assert_eq!(settings.search.max_limit, 100);
        assert_eq!(settings.bulk.max_update_ids, 50);
        assert_eq!(settings.bulk.max_delete_ids, 20);
    }

    #[test]
    fn test_settings_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let config_content = r#"
[uploads]
max_file_size_mb = 100
allowed_mime_types = ["application/pdf", "image/png"]

[bulk]
max_update_ids = 25
max_delete_ids = 10
"#;
        fs::write(&config_path, config_content).expect("Failed to write config");

        let settings =
            Settings::load(config_path.to_str().unwrap()).expect("Failed to load settings");

        assert_eq!(settings.uploads.max_file_size_mb, 100);
        assert_eq!(settings.max_file_size_bytes(), 100 * 1024 * 1024);
        assert!(settings.mime_type_allowed("image/png"));
        assert!(!settings.mime_type_allowed("text/plain"));
        assert_eq!(settings.bulk.max_update_ids, 25);
        assert_eq!(settings.bulk.max_delete_ids, 10);
    }

    #[test]
    fn test_settings_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[uploads\nmax_file_size_mb = ").expect("Failed to write config");

        let err = Settings::load(config_path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, GrantsError::Config(_)));
    }

    #[test]
    fn test_settings_env_override() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let config_content = r#"
[uploads]
max_file_size_mb = 50
"#;
        fs::write(&config_path, config_content).expect("Failed to write config");

        std::env::set_var("GRANTDESK__UPLOADS__MAX_FILE_SIZE_MB", "200");

        // Load settings - env should override file
        let settings =
            Settings::load(config_path.to_str().unwrap()).expect("Failed to load settings");
        assert_eq!(settings.uploads.max_file_size_mb, 200);

        // Cleanup
        std::env::remove_var("GRANTDESK__UPLOADS__MAX_FILE_SIZE_MB");
    }
}
