use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::authz::permissions::{role_permissions, Permission};
use crate::entities::grant::Grant;
use crate::entities::user::Role;

/// Check if `role` holds `permission`, either directly or through the
/// `admin:all` wildcard. Pure predicate: absence of permission is `false`,
/// never an error.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    let granted = role_permissions(role);
    granted.contains(&permission) || granted.contains(&Permission::AdminAll)
}

/// True if `role` holds at least one of `permissions`.
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

/// True if `role` holds every one of `permissions`.
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(role, *p))
}

/// Check if a user can access a specific grant. Admins see everything;
/// a PI sees only their own grants; Finance and Viewers see any grant
/// their generic view permission covers.
pub fn can_access_grant(role: Role, user_id: &str, grant: &Grant) -> bool {
    match role {
        Role::Admin => true,
        Role::Pi => grant.principal_investigator_id == user_id,
        Role::Finance | Role::Viewer => has_permission(role, Permission::GrantsView),
    }
}

/// Check if a user can edit a specific grant: requires the edit
/// permission, and PIs may only edit grants they own.
pub fn can_edit_grant(role: Role, user_id: &str, grant: &Grant) -> bool {
    if !has_permission(role, Permission::GrantsEdit) {
        return false;
    }
    match role {
        Role::Admin => true,
        Role::Pi => {
            let owns = grant.principal_investigator_id == user_id;
            if !owns {
                debug!(
                    grant_id = %grant.id,
                    user_id,
                    "denying grants:edit: user is not the principal investigator"
                );
            }
            owns
        }
        _ => false,
    }
}

pub fn can_approve_budget(role: Role) -> bool {
    has_permission(role, Permission::BudgetsApprove)
}

pub fn can_manage_users(role: Role) -> bool {
    has_permission(role, Permission::UsersManage)
}

/// Bulk updates and deletes are limited to roles with cross-grant scope.
pub fn can_perform_bulk_operations(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Finance)
}

/// Action tag surfaced to callers for a grant the user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantAction {
    View,
    Edit,
    Delete,
    UploadDocuments,
    CreateReports,
}

impl GrantAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantAction::View => "view",
            GrantAction::Edit => "edit",
            GrantAction::Delete => "delete",
            GrantAction::UploadDocuments => "upload_documents",
            GrantAction::CreateReports => "create_reports",
        }
    }
}

impl fmt::Display for GrantAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the actions available to a user on a grant by re-running the
/// individual checks. Delete stays admin-only even for roles that hold
/// the generic delete permission.
pub fn available_grant_actions(role: Role, user_id: &str, grant: &Grant) -> Vec<GrantAction> {
    let mut actions = Vec::new();

    if can_access_grant(role, user_id, grant) {
        actions.push(GrantAction::View);
    }
    if can_edit_grant(role, user_id, grant) {
        actions.push(GrantAction::Edit);
    }
    if has_permission(role, Permission::GrantsDelete) && role == Role::Admin {
        actions.push(GrantAction::Delete);
    }
    if has_permission(role, Permission::DocumentsUpload) {
        actions.push(GrantAction::UploadDocuments);
    }
    if has_permission(role, Permission::ReportsCreate) {
        actions.push(GrantAction::CreateReports);
    }

    actions
}
