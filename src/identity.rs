//! Caller identity. An [`AuthContext`] is established once by the hosting
//! layer (from whatever session mechanism it uses) and passed into the
//! checks; nothing here reads ambient state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::authz::{self, GrantAction, Permission};
use crate::entities::grant::Grant;
use crate::entities::user::Role;
use crate::errors::GrantsError;

/// The authenticated caller: a user id and the role fixed for the
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    pub user_id: String,
    pub role: Role,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        authz::has_permission(self.role, permission)
    }

    pub fn can_access_grant(&self, grant: &Grant) -> bool {
        authz::can_access_grant(self.role, &self.user_id, grant)
    }

    pub fn can_edit_grant(&self, grant: &Grant) -> bool {
        authz::can_edit_grant(self.role, &self.user_id, grant)
    }

    pub fn grant_actions(&self, grant: &Grant) -> Vec<GrantAction> {
        authz::available_grant_actions(self.role, &self.user_id, grant)
    }

    /// Err(AccessDenied) unless the caller's role holds `permission`.
    pub fn require_permission(&self, permission: Permission) -> Result<(), GrantsError> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            debug!(
                user_id = %self.user_id,
                role = %self.role,
                permission = %permission,
                "permission check failed"
            );
            Err(GrantsError::AccessDenied("Insufficient permissions".into()))
        }
    }

    /// Err(AccessDenied) unless the caller holds exactly `role`.
    pub fn require_role(&self, role: Role) -> Result<(), GrantsError> {
        if self.role == role {
            Ok(())
        } else {
            Err(GrantsError::AccessDenied(format!(
                "Requires the {} role",
                role.display_name()
            )))
        }
    }

    pub fn require_admin(&self) -> Result<(), GrantsError> {
        self.require_role(Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    use crate::entities::grant::GrantStatus;

    fn make_grant(pi_id: &str) -> Grant {
        let now = Utc::now();
        Grant {
            id: "grant-1".into(),
            grant_title: "Quantum Sensing for Climate Observation".into(),
            grant_number_master: "NSF-2024-0042".into(),
            agency_name: "National Science Foundation".into(),
            principal_investigator_id: pi_id.into(),
            created_by_id: "admin-1".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            total_years: 3,
            current_year_number: 1,
            status: GrantStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_require_permission() {
        let ctx = AuthContext::new("fin-1", Role::Finance);
        assert!(ctx.require_permission(Permission::BudgetsApprove).is_ok());

        let err = ctx
            .require_permission(Permission::UsersManage)
            .unwrap_err();
        assert!(matches!(err, GrantsError::AccessDenied(_)));
        assert!(err.to_string().contains("Insufficient permissions"));
    }

    #[test]
    fn test_require_admin() {
        assert!(AuthContext::new("admin-1", Role::Admin).require_admin().is_ok());
        assert!(AuthContext::new("pi-1", Role::Pi).require_admin().is_err());
    }

    #[test]
    fn test_grant_scoped_checks() {
        let grant = make_grant("pi-7");
        let owner = AuthContext::new("pi-7", Role::Pi);
        let other = AuthContext::new("pi-8", Role::Pi);

        assert!(owner.can_access_grant(&grant));
        assert!(owner.can_edit_grant(&grant));
        assert!(!other.can_access_grant(&grant));
        assert!(!other.can_edit_grant(&grant));
    }

    #[test]
    fn test_grant_actions_delegate() {
        let grant = make_grant("pi-7");
        let viewer = AuthContext::new("view-1", Role::Viewer);
        assert_eq!(viewer.grant_actions(&grant), vec![GrantAction::View]);
    }
}
