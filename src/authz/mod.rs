pub mod engine;
pub mod permissions;

pub use engine::{
    available_grant_actions, can_access_grant, can_approve_budget, can_edit_grant,
    can_manage_users, can_perform_bulk_operations, has_all_permissions, has_any_permission,
    has_permission, GrantAction,
};
pub use permissions::{role_permissions, Permission};
