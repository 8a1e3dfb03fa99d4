use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::user::Role;

/// Atomic named capability checked against a role's static set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "grants:view")]
    GrantsView,
    #[serde(rename = "grants:create")]
    GrantsCreate,
    #[serde(rename = "grants:edit")]
    GrantsEdit,
    #[serde(rename = "grants:delete")]
    GrantsDelete,
    #[serde(rename = "budgets:view")]
    BudgetsView,
    #[serde(rename = "budgets:edit")]
    BudgetsEdit,
    #[serde(rename = "budgets:approve")]
    BudgetsApprove,
    #[serde(rename = "documents:view")]
    DocumentsView,
    #[serde(rename = "documents:upload")]
    DocumentsUpload,
    #[serde(rename = "documents:delete")]
    DocumentsDelete,
    #[serde(rename = "reports:view")]
    ReportsView,
    #[serde(rename = "reports:create")]
    ReportsCreate,
    #[serde(rename = "users:view")]
    UsersView,
    #[serde(rename = "users:manage")]
    UsersManage,
    /// Wildcard: a role holding this passes every permission check.
    #[serde(rename = "admin:all")]
    AdminAll,
}

impl Permission {
    pub const ALL: [Permission; 15] = [
        Permission::GrantsView,
        Permission::GrantsCreate,
        Permission::GrantsEdit,
        Permission::GrantsDelete,
        Permission::BudgetsView,
        Permission::BudgetsEdit,
        Permission::BudgetsApprove,
        Permission::DocumentsView,
        Permission::DocumentsUpload,
        Permission::DocumentsDelete,
        Permission::ReportsView,
        Permission::ReportsCreate,
        Permission::UsersView,
        Permission::UsersManage,
        Permission::AdminAll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::GrantsView => "grants:view",
            Permission::GrantsCreate => "grants:create",
            Permission::GrantsEdit => "grants:edit",
            Permission::GrantsDelete => "grants:delete",
            Permission::BudgetsView => "budgets:view",
            Permission::BudgetsEdit => "budgets:edit",
            Permission::BudgetsApprove => "budgets:approve",
            Permission::DocumentsView => "documents:view",
            Permission::DocumentsUpload => "documents:upload",
            Permission::DocumentsDelete => "documents:delete",
            Permission::ReportsView => "reports:view",
            Permission::ReportsCreate => "reports:create",
            Permission::UsersView => "users:view",
            Permission::UsersManage => "users:manage",
            Permission::AdminAll => "admin:all",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static role -> permission table. This is data fixed at compile time;
/// there is no dynamic role creation.
pub const fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => &[
            Permission::GrantsView,
            Permission::GrantsCreate,
            Permission::GrantsEdit,
            Permission::GrantsDelete,
            Permission::BudgetsView,
            Permission::BudgetsEdit,
            Permission::BudgetsApprove,
            Permission::DocumentsView,
            Permission::DocumentsUpload,
            Permission::DocumentsDelete,
            Permission::ReportsView,
            Permission::ReportsCreate,
            Permission::UsersView,
            Permission::UsersManage,
            Permission::AdminAll,
        ],
        Role::Pi => &[
            Permission::GrantsView,
            Permission::GrantsCreate,
            Permission::GrantsEdit,
            Permission::BudgetsView,
            Permission::BudgetsEdit,
            Permission::DocumentsView,
            Permission::DocumentsUpload,
            Permission::DocumentsDelete,
            Permission::ReportsView,
            Permission::ReportsCreate,
        ],
        Role::Finance => &[
            Permission::GrantsView,
            Permission::BudgetsView,
            Permission::BudgetsEdit,
            Permission::BudgetsApprove,
            Permission::DocumentsView,
            Permission::DocumentsUpload,
            Permission::ReportsView,
        ],
        Role::Viewer => &[
            Permission::GrantsView,
            Permission::BudgetsView,
            Permission::DocumentsView,
            Permission::ReportsView,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_holds_every_permission() {
        let admin = role_permissions(Role::Admin);
        for p in Permission::ALL {
            assert!(admin.contains(&p), "ADMIN missing {p}");
        }
    }

    #[test]
    fn test_only_admin_holds_wildcard() {
        for role in [Role::Pi, Role::Finance, Role::Viewer] {
            assert!(!role_permissions(role).contains(&Permission::AdminAll));
        }
    }

    #[test]
    fn test_role_sets_are_subsets_of_admin() {
        let admin = role_permissions(Role::Admin);
        for role in [Role::Pi, Role::Finance, Role::Viewer] {
            for p in role_permissions(role) {
                assert!(admin.contains(p), "{role} grants {p} but ADMIN does not");
            }
        }
    }

    #[test]
    fn test_permission_serde_tags() {
        assert_eq!(
            serde_json::to_string(&Permission::BudgetsApprove).unwrap(),
            "\"budgets:approve\""
        );
        assert_eq!(
            serde_json::from_str::<Permission>("\"admin:all\"").unwrap(),
            Permission::AdminAll
        );
    }
}
