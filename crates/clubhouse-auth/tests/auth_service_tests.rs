use clubhouse_auth::{AuthError, AuthService, UserService};
use clubhouse_database::test_utils::TestDatabase;
use clubhouse_entities::types::RoleType;

/// Tests truncate the shared test database and must run one at a time.
static TEST_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

#[tokio::test]
async fn login_and_session_lifecycle() -> anyhow::Result<()> {
    let _guard = TEST_LOCK.lock().await;
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.connection_arc();

    let user_service = UserService::new(db.clone());
    let auth_service = AuthService::new(db.clone());

    let user = user_service
        .create_user("Club Admin", "admin@club.test", "correct horse", RoleType::Admin)
        .await?;
    assert_eq!(user.role, RoleType::Admin);

    // Wrong password is rejected
    let err = auth_service
        .login("admin@club.test", "wrong password")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AuthenticationError(_)));

    // Unknown email is indistinguishable from a wrong password
    let err = auth_service
        .login("nobody@club.test", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::AuthenticationError(_)));

    // Successful login yields a verifiable session
    let token = auth_service.login("admin@club.test", "correct horse").await?;
    let session_user = auth_service.verify_session(&token).await?;
    assert_eq!(session_user.id, user.id);

    // Logout invalidates the session
    auth_service.logout(&token).await?;
    let err = auth_service.verify_session(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::Unauthorized(_)));

    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_rejected() -> anyhow::Result<()> {
    let _guard = TEST_LOCK.lock().await;
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.connection_arc();

    let user_service = UserService::new(db);

    user_service
        .create_user("First", "dup@club.test", "password123", RoleType::Member)
        .await?;

    let err = user_service
        .create_user("Second", "dup@club.test", "password456", RoleType::Member)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));

    Ok(())
}

#[tokio::test]
async fn set_password_replaces_credentials() -> anyhow::Result<()> {
    let _guard = TEST_LOCK.lock().await;
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.connection_arc();

    let user_service = UserService::new(db.clone());
    let auth_service = AuthService::new(db);

    user_service
        .create_user("Rotator", "rotate@club.test", "old password", RoleType::Admin)
        .await?;

    user_service
        .set_password("rotate@club.test", "new password")
        .await?;

    assert!(auth_service
        .login("rotate@club.test", "old password")
        .await
        .is_err());
    assert!(auth_service
        .login("rotate@club.test", "new password")
        .await
        .is_ok());

    Ok(())
}
