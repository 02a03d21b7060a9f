use crate::permissions::{Permission, Role};
use clubhouse_entities::users;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Simplified user schema for OpenAPI documentation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSchema {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// Authentication context attached to the request by the auth middleware
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// User associated with this auth context
    pub user: users::Model,
    pub effective_role: Role,
}

impl AuthContext {
    pub fn new_session(user: users::Model) -> Self {
        let effective_role = Role::from(user.role);
        Self {
            user,
            effective_role,
        }
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.effective_role.grants(permission)
    }

    pub fn is_admin(&self) -> bool {
        self.effective_role == Role::Admin
    }
}
