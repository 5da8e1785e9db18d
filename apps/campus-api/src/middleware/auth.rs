//! 认证和授权中间件
//!
//! - request_context：请求上下文中间件，注入 request_id/trace_id
//! - bearer_token：从 Authorization 头提取 Bearer token
//! - require_session：验证 access token 并得到会话上下文
//! - require_permission：按权限码放行，否则 403

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::Next,
    response::Response,
};
use campus_auth::AuthError;
use campus_telemetry::new_request_ids;
use domain::SessionContext;
use tracing::{Instrument, info_span};

use crate::AppState;
use crate::utils::response::{auth_error, forbidden_error, internal_auth_error};

/// 请求上下文中间件：注入 request_id/trace_id
pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}

/// 从请求头中提取 Bearer token
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header_value = headers.get(header::AUTHORIZATION)?;
    let auth_str = header_value.to_str().ok()?;
    auth_str.strip_prefix("Bearer ")
}

/// 验证 access token 并提取会话上下文
pub fn require_session(state: &AppState, headers: &HeaderMap) -> Result<SessionContext, Response> {
    let token = match bearer_token(headers) {
        Some(token) => token,
        None => return Err(auth_error(StatusCode::UNAUTHORIZED)),
    };
    match state.auth.verify_access_token(token) {
        Ok(ctx) => Ok(ctx),
        Err(AuthError::TokenInvalid | AuthError::TokenExpired) => {
            Err(auth_error(StatusCode::UNAUTHORIZED))
        }
        Err(err) => Err(internal_auth_error(err)),
    }
}

/// 校验权限码
pub fn require_permission(ctx: &SessionContext, code: &str) -> Result<(), Response> {
    if ctx.has_permission(code) {
        return Ok(());
    }
    tracing::warn!(
        user_id = %ctx.user_id,
        role = %ctx.role,
        permission = code,
        "permission denied"
    );
    Err(forbidden_error())
}

/// 会话 + 权限一次校验
pub fn authorize(
    state: &AppState,
    headers: &HeaderMap,
    code: &str,
) -> Result<SessionContext, Response> {
    let ctx = require_session(state, headers)?;
    require_permission(&ctx, code)?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bearer, test_state, token_for};
    use domain::{Role, permissions};

    #[test]
    fn bearer_token_extracts() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer token-1"));
        assert_eq!(bearer_token(&headers), Some("token-1"));
    }

    #[test]
    fn bearer_token_requires_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn missing_token_is_unauthorized() {
        let state = test_state();
        let err = require_session(&state, &HeaderMap::new()).expect_err("no token");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        let state = test_state();
        let err = require_session(&state, &bearer("not-a-jwt")).expect_err("bad token");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn student_cannot_write() {
        let state = test_state();
        let headers = bearer(&token_for(Role::Student));
        let ctx = require_session(&state, &headers).expect("session");
        assert!(require_permission(&ctx, permissions::CAMPUS_READ).is_ok());
        let err = authorize(&state, &headers, permissions::CAMPUS_WRITE).expect_err("forbidden");
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }
}
