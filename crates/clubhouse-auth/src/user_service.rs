use crate::auth_service::{AuthError, AuthService};
use chrono::Utc;
use clubhouse_entities::{types::RoleType, users};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum UserServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub struct UserService {
    db: Arc<DatabaseConnection>,
}

impl UserService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, UserServiceError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;
        Ok(user)
    }

    /// Create a user with a hashed password
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: RoleType,
    ) -> Result<users::Model, UserServiceError> {
        if password.len() < 8 {
            return Err(UserServiceError::InvalidInput(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if self.find_by_email(email).await?.is_some() {
            return Err(UserServiceError::AlreadyExists(email.to_string()));
        }

        let password_hash = AuthService::hash_password(password)?;
        let now = Utc::now();

        let user = users::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = user.insert(self.db.as_ref()).await?;
        info!(user_id = user.id, email = %user.email, "created user");
        Ok(user)
    }

    /// Replace a user's password, identified by email
    pub async fn set_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<(), UserServiceError> {
        if new_password.len() < 8 {
            return Err(UserServiceError::InvalidInput(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserServiceError::NotFound(email.to_string()))?;

        let password_hash = AuthService::hash_password(new_password)?;

        let mut active: users::ActiveModel = user.into();
        active.password_hash = Set(password_hash);
        active.updated_at = Set(Utc::now());
        active.update(self.db.as_ref()).await?;

        Ok(())
    }
}
