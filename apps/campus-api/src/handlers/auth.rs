//! 认证相关 handlers：健康检查、登录、刷新 token、注销、当前用户
//!
//! ## 提供的端点
//!
//! ### 公开端点（无需认证）
//! - `GET /health` - 健康检查，返回 `{"ok": true}`
//! - `POST /login` - 邮箱 + 口令登录，返回 access/refresh token 与用户资料
//! - `POST /refresh-token` - 使用 refresh token 换取新的 token 对
//!
//! ### 私有端点（需 Bearer token 认证）
//! - `POST /logout` - 解除当前 refresh token 绑定
//! - `GET /me` - 当前登录用户资料
//!
//! ## 登录流程
//! 1. 客户端发送邮箱与口令
//! 2. `AuthService::login()` 按邮箱查找账户并校验口令（明文口令校验成功后升级为 argon2）
//! 3. 成功后返回：
//!    - `accessToken` / `refreshToken`
//!    - `expires`: 过期时间（Unix 毫秒时间戳）
//!    - `user` 与角色对应的 `permissions`
//!
//! refresh token 每次刷新都会轮换，旧 token 随即失效。

use crate::AppState;
use crate::middleware::require_session;
use crate::utils::response::{auth_error, internal_auth_error, ok};
use crate::utils::validation::{json_body, normalize_required};
use api_contract::{LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use campus_auth::AuthError;

/// 健康检查端点：只反映进程存活。
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// 登录接口
///
/// # Errors
///
/// - `400 BAD REQUEST`: 请求体缺字段或邮箱为空
/// - `401 UNAUTHORIZED`: 邮箱不存在或口令错误（不区分两者）
/// - `500 INTERNAL SERVER ERROR`: 认证服务内部错误
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let email = match normalize_required(req.email, "email") {
        Ok(email) => email,
        Err(response) => return response,
    };
    match state.auth.login(&email, &req.password).await {
        Ok((user, tokens)) => {
            let permissions = user.role.permissions();
            ok(LoginResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                // 秒级时间戳转毫秒（前端期望的格式）
                expires: tokens.expires_at.saturating_mul(1000),
                user,
                permissions,
            })
        }
        Err(AuthError::InvalidCredentials) => auth_error(StatusCode::UNAUTHORIZED),
        Err(err) => internal_auth_error(err),
    }
}

/// 刷新 access token
///
/// 过期、伪造或已被轮换掉的 refresh token 一律返回 401。
pub async fn refresh_token(
    State(state): State<AppState>,
    body: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> Response {
    let req = match json_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };
    match state.auth.refresh(&req.refresh_token).await {
        Ok(tokens) => ok(RefreshTokenResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires: tokens.expires_at.saturating_mul(1000),
        }),
        Err(AuthError::TokenInvalid | AuthError::TokenExpired) => {
            auth_error(StatusCode::UNAUTHORIZED)
        }
        Err(err) => internal_auth_error(err),
    }
}

/// 注销：当前 refresh token 失效，access token 自然过期。
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.auth.logout(&ctx).await {
        Ok(()) => ok(()),
        Err(err) => internal_auth_error(err),
    }
}

/// 当前登录用户
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.auth.current_user(&ctx).await {
        Ok(user) => ok(user),
        Err(AuthError::TokenInvalid) => auth_error(StatusCode::UNAUTHORIZED),
        Err(err) => internal_auth_error(err),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_state};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    async fn login(state: &crate::AppState, email: &str, password: &str) -> (StatusCode, Value) {
        let body = json!({ "email": email, "password": password });
        send(state, "POST", "/api/login", None, Some(body)).await
    }

    #[tokio::test]
    async fn health_is_public() {
        let state = test_state();
        let (status, body) = send(&state, "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn login_returns_tokens_and_profile() {
        let state = test_state();
        let (status, body) = login(&state, "Admin@Campus.edu", "admin123").await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert!(data["accessToken"].as_str().is_some_and(|token| !token.is_empty()));
        assert_eq!(data["user"]["id"], "U001");
        assert_eq!(data["user"]["role"], "admin");
        assert!(data["user"]["lastLogin"].is_string());
        assert!(
            data["permissions"]
                .as_array()
                .is_some_and(|codes| codes.iter().any(|code| code == "USER.WRITE"))
        );
    }

    #[tokio::test]
    async fn unknown_account_is_unauthorized() {
        let state = test_state();
        let (status, body) = login(&state, "nobody@x.com", "password123").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "AUTH.UNAUTHORIZED");

        let (status, _) = login(&state, "staff@campus.edu", "password123").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn blank_email_is_bad_request() {
        let state = test_state();
        let (status, _) = login(&state, "  ", "admin123").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn refresh_rotates_and_logout_revokes() {
        let state = test_state();
        let (_, body) = login(&state, "staff@campus.edu", "staff123").await;
        let first = body["data"]["refreshToken"].as_str().expect("refresh").to_string();
        let access = body["data"]["accessToken"].as_str().expect("access").to_string();

        let (status, body) = send(
            &state,
            "POST",
            "/refresh-token",
            None,
            Some(json!({ "refreshToken": first })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let second = body["data"]["refreshToken"].as_str().expect("refresh").to_string();

        let (status, _) = send(
            &state,
            "POST",
            "/refresh-token",
            None,
            Some(json!({ "refreshToken": first })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let ctx = state.auth.verify_access_token(&access).expect("ctx");
        state.auth.logout(&ctx).await.expect("logout");
        let (status, _) = send(
            &state,
            "POST",
            "/refresh-token",
            None,
            Some(json!({ "refreshToken": second })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn me_returns_the_caller() {
        let state = test_state();
        let (status, body) = send(&state, "GET", "/me", Some(domain::Role::Lecturer), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "sarah.johnson@campus.edu");

        let (status, _) = send(&state, "POST", "/logout", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = send(&state, "POST", "/logout", Some(domain::Role::Lecturer), None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
