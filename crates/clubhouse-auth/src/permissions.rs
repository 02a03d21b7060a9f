//! Role and permission model
//!
//! Roles come from the users table; permissions are derived from the role.
//! Handlers check permissions with the `permission_guard!` macro.

use clubhouse_entities::types::RoleType;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    Member,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Member => write!(f, "member"),
        }
    }
}

impl From<RoleType> for Role {
    fn from(role: RoleType) -> Self {
        match role {
            RoleType::Admin => Role::Admin,
            RoleType::Member => Role::Member,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Permission {
    ContentRead,
    ContentWrite,
    AnalyticsRead,
    UsersManage,
    AssistantUse,
}

impl Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Permission::ContentRead => "content:read",
            Permission::ContentWrite => "content:write",
            Permission::AnalyticsRead => "analytics:read",
            Permission::UsersManage => "users:manage",
            Permission::AssistantUse => "assistant:use",
        };
        write!(f, "{}", s)
    }
}

impl Role {
    /// All permissions granted by this role
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => &[
                Permission::ContentRead,
                Permission::ContentWrite,
                Permission::AnalyticsRead,
                Permission::UsersManage,
                Permission::AssistantUse,
            ],
            Role::Member => &[Permission::ContentRead, Permission::AssistantUse],
        }
    }

    pub fn grants(&self, permission: &Permission) -> bool {
        self.permissions().contains(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_has_all_permissions() {
        for permission in [
            Permission::ContentRead,
            Permission::ContentWrite,
            Permission::AnalyticsRead,
            Permission::UsersManage,
            Permission::AssistantUse,
        ] {
            assert!(Role::Admin.grants(&permission), "admin missing {permission}");
        }
    }

    #[test]
    fn member_cannot_write_or_read_analytics() {
        assert!(Role::Member.grants(&Permission::ContentRead));
        assert!(!Role::Member.grants(&Permission::ContentWrite));
        assert!(!Role::Member.grants(&Permission::AnalyticsRead));
        assert!(!Role::Member.grants(&Permission::UsersManage));
    }

    #[test]
    fn role_display_matches_db_values() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Member.to_string(), "member");
    }
}
