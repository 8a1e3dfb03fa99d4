//! User account rule set.

use serde::{Deserialize, Serialize};

use crate::entities::user::{Role, User};
use crate::validation::rules::{check_email, check_id, check_str_len};
use crate::validation::{Validate, ValidationErrors};

/// Create input for a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

/// Partial update for a user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

fn check_full_name(errors: &mut ValidationErrors, value: &str) {
    check_str_len(errors, "fullName", value, 2, 100, "Full name");
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_id(&mut errors, "id", &self.id, "Invalid ID");
        check_email(&mut errors, "email", &self.email);
        check_full_name(&mut errors, &self.full_name);
        errors.into_result()
    }
}

impl Validate for CreateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, "email", &self.email);
        check_full_name(&mut errors, &self.full_name);
        errors.into_result()
    }
}

impl Validate for UpdateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(email) = &self.email {
            check_email(&mut errors, "email", email);
        }
        if let Some(full_name) = &self.full_name {
            check_full_name(&mut errors, full_name);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateUser {
        CreateUser {
            email: "pi@university.edu".into(),
            full_name: "Dana Whitfield".into(),
            role: Role::Pi,
        }
    }

    #[test]
    fn test_valid_user() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_bad_email() {
        let mut input = valid_create();
        input.email = "not-an-email".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.field("email"), &["Invalid email address".to_string()]);
    }

    #[test]
    fn test_full_name_bounds() {
        let mut input = valid_create();
        input.full_name = "A".into();
        let errors = input.validate().unwrap_err();
        assert!(errors.field("fullName")[0].contains("at least 2 characters"));

        input.full_name = "x".repeat(101);
        let errors = input.validate().unwrap_err();
        assert!(errors.field("fullName")[0].contains("less than 100 characters"));
    }

    #[test]
    fn test_update_partial() {
        let patch = UpdateUser {
            role: Some(Role::Finance),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = UpdateUser {
            email: Some("nope".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
