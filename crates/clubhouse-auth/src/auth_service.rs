use argon2::{PasswordHasher, PasswordVerifier};
use base64::Engine;
use chrono::{Duration, Utc};
use rand::RngCore;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use clubhouse_entities::{sessions, users};

/// Session lifetime for password logins
const SESSION_LIFETIME_DAYS: i64 = 7;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Database error: {reason}")]
    DatabaseError { reason: String },
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(error: sea_orm::DbErr) -> Self {
        match error {
            sea_orm::DbErr::RecordNotFound(_) => {
                AuthError::NotFound("Record not found".to_string())
            }
            _ => AuthError::DatabaseError {
                reason: error.to_string(),
            },
        }
    }
}

pub struct AuthService {
    db: Arc<DatabaseConnection>,
}

impl AuthService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Authenticate with email + password and open a new session.
    ///
    /// Returns the session token to hand back to the client.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| {
                // Same error as a bad password so the response does not
                // reveal which accounts exist.
                AuthError::AuthenticationError("Invalid email or password".to_string())
            })?;

        self.verify_password(password, &user.password_hash)?;

        debug!(user_id = user.id, "password login succeeded");
        self.create_session(user.id).await
    }

    /// Create a session row for a user and return its token
    pub async fn create_session(&self, user_id: i32) -> Result<String, AuthError> {
        let session_token = self.generate_session_token();
        let expires_at = Utc::now() + Duration::days(SESSION_LIFETIME_DAYS);

        let new_session = sessions::ActiveModel {
            user_id: Set(user_id),
            session_token: Set(session_token.clone()),
            expires_at: Set(expires_at),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_session.insert(self.db.as_ref()).await?;

        Ok(session_token)
    }

    /// Resolve a session token to its user, rejecting expired sessions
    pub async fn verify_session(&self, session_token: &str) -> Result<users::Model, AuthError> {
        let session = sessions::Entity::find()
            .filter(sessions::Column::SessionToken.eq(session_token))
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| AuthError::Unauthorized("Invalid session".to_string()))?;

        if session.expires_at < Utc::now() {
            // Expired rows are useless; reap on sight
            let _ = session.clone().delete(self.db.as_ref()).await;
            return Err(AuthError::Unauthorized("Session expired".to_string()));
        }

        let user = users::Entity::find_by_id(session.user_id)
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| AuthError::Unauthorized("User no longer exists".to_string()))?;

        Ok(user)
    }

    /// Delete the session identified by the given token
    pub async fn logout(&self, session_token: &str) -> Result<(), AuthError> {
        let deleted = sessions::Entity::delete_many()
            .filter(sessions::Column::SessionToken.eq(session_token))
            .exec(self.db.as_ref())
            .await?;

        if deleted.rows_affected == 0 {
            warn!("logout called with unknown session token");
        }

        Ok(())
    }

    /// Hash a password with argon2 for storage
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        use argon2::password_hash::{rand_core::OsRng, SaltString};
        let argon2 = argon2::Argon2::default();
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::InternalServerError(format!("Failed to hash password: {e}")))?
            .to_string();
        Ok(password_hash)
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = argon2::password_hash::PasswordHash::new(password_hash)
            .map_err(|e| AuthError::InternalServerError(format!("Corrupt password hash: {e}")))?;

        let argon2 = argon2::Argon2::default();
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::AuthenticationError("Invalid email or password".to_string()))
    }

    fn generate_session_token(&self) -> String {
        let mut bytes = [0u8; 48];
        rand::thread_rng().fill_bytes(&mut bytes);
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_roundtrip() {
        let hash = AuthService::hash_password("hunter2!").unwrap();
        assert!(hash.starts_with("$argon2"));

        let parsed = argon2::password_hash::PasswordHash::new(&hash).unwrap();
        assert!(argon2::Argon2::default()
            .verify_password(b"hunter2!", &parsed)
            .is_ok());
        assert!(argon2::Argon2::default()
            .verify_password(b"wrong", &parsed)
            .is_err());
    }
}
