use campus_auth::{AuthError, JwtManager};
use domain::{Role, SessionContext, permissions};

#[test]
fn jwt_issue_and_decode() {
    let jwt = JwtManager::new("secret".to_string(), 3600, 7200);
    let ctx = SessionContext::new("U001", "admin@campus.edu", Role::Admin);

    let tokens = jwt.issue_tokens(&ctx).expect("tokens");
    let access_ctx = jwt.decode_access(&tokens.access_token).expect("access");
    let (refresh_ctx, jti) = jwt.decode_refresh(&tokens.refresh_token).expect("refresh");

    assert_eq!(access_ctx.user_id, "U001");
    assert_eq!(access_ctx.role, Role::Admin);
    assert!(access_ctx.has_permission(permissions::CAMPUS_WRITE));
    assert_eq!(refresh_ctx.email, "admin@campus.edu");
    assert_eq!(jti, tokens.refresh_jti);
}

#[test]
fn token_types_are_not_interchangeable() {
    let jwt = JwtManager::new("secret".to_string(), 3600, 7200);
    let ctx = SessionContext::new("U002", "john.smith@campus.edu", Role::Student);
    let tokens = jwt.issue_tokens(&ctx).expect("tokens");

    assert!(matches!(
        jwt.decode_access(&tokens.refresh_token),
        Err(AuthError::TokenInvalid)
    ));
    assert!(matches!(
        jwt.decode_refresh(&tokens.access_token),
        Err(AuthError::TokenInvalid)
    ));
}

#[test]
fn foreign_secret_is_rejected() {
    let issuer = JwtManager::new("secret-a".to_string(), 3600, 7200);
    let verifier = JwtManager::new("secret-b".to_string(), 3600, 7200);
    let ctx = SessionContext::new("U002", "john.smith@campus.edu", Role::Student);
    let tokens = issuer.issue_tokens(&ctx).expect("tokens");
    assert!(matches!(
        verifier.decode_access(&tokens.access_token),
        Err(AuthError::TokenInvalid)
    ));
}
