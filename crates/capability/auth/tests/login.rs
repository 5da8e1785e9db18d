use std::sync::Arc;

use campus_auth::{AuthError, AuthService, JwtManager, is_hashed};
use campus_storage::{InMemoryUserStore, UserStore};
use domain::Role;

fn setup() -> (Arc<InMemoryUserStore>, AuthService) {
    let user_store = Arc::new(InMemoryUserStore::with_demo_accounts());
    let jwt = JwtManager::new("secret".to_string(), 3600, 7200);
    (user_store.clone(), AuthService::new(user_store, jwt))
}

#[tokio::test]
async fn unknown_account_never_logs_in() {
    let (_, auth) = setup();
    let result = auth.login("nobody@x.com", "password123").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (_, auth) = setup();
    let result = auth.login("john.smith@campus.edu", "admin123").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn login_stamps_last_login_and_upgrades_password() {
    let (store, auth) = setup();
    let (user, tokens) = auth
        .login("John.Smith@campus.edu", "password123")
        .await
        .expect("login");
    assert_eq!(user.id, "U002");
    assert_eq!(user.role, Role::Student);
    assert!(user.last_login.is_some());

    let account = store
        .find_by_email("john.smith@campus.edu")
        .await
        .expect("query")
        .expect("account");
    assert!(is_hashed(&account.password));
    assert_eq!(account.refresh_jti.as_deref(), Some(tokens.refresh_jti.as_str()));

    // 升级后的哈希仍能登录
    auth.login("john.smith@campus.edu", "password123")
        .await
        .expect("login with hash");
}

#[tokio::test]
async fn current_user_follows_access_token() {
    let (_, auth) = setup();
    let (_, tokens) = auth
        .login("sarah.johnson@campus.edu", "password123")
        .await
        .expect("login");
    let ctx = auth
        .verify_access_token(&tokens.access_token)
        .expect("verify");
    let user = auth.current_user(&ctx).await.expect("me");
    assert_eq!(user.name, "Sarah Johnson");
    assert_eq!(ctx.role, Role::Lecturer);
}
