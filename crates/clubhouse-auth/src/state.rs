use crate::{auth_service::AuthService, user_service::UserService};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing all authentication services for Axum
#[derive(Clone)]
pub struct AuthState {
    /// Database connection
    pub db: Arc<DatabaseConnection>,
    /// Authentication service
    pub auth_service: Arc<AuthService>,
    /// User service
    pub user_service: Arc<UserService>,
}

impl AuthState {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let auth_service = Arc::new(AuthService::new(db.clone()));
        let user_service = Arc::new(UserService::new(db.clone()));
        Self {
            db,
            auth_service,
            user_service,
        }
    }
}
