use crate::{AuthError, AuthTokens};
use domain::{Role, SessionContext};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

// 区分 access 与 refresh 的 token 类型。
const ACCESS_TOKEN_TYPE: &str = "access";
const REFRESH_TOKEN_TYPE: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
/// JWT 内部 claims。权限不写入 token，解码时按角色重新展开。
struct Claims {
    sub: String,
    email: String,
    role: String,
    exp: usize,
    token_type: String,
    jti: Option<String>,
}

impl Claims {
    fn into_context(self) -> Result<SessionContext, AuthError> {
        let role = Role::parse(&self.role).ok_or(AuthError::TokenInvalid)?;
        Ok(SessionContext::new(self.sub, self.email, role))
    }
}

/// JWT 生成与校验。
pub struct JwtManager {
    secret: Vec<u8>,
    access_ttl_seconds: u64,
    refresh_ttl_seconds: u64,
}

impl JwtManager {
    /// 创建 JWT 管理器。
    pub fn new(secret: String, access_ttl_seconds: u64, refresh_ttl_seconds: u64) -> Self {
        Self {
            secret: secret.into_bytes(),
            access_ttl_seconds,
            refresh_ttl_seconds,
        }
    }

    /// 基于 SessionContext 签发 access/refresh token。
    pub fn issue_tokens(&self, ctx: &SessionContext) -> Result<AuthTokens, AuthError> {
        let access_token = self.encode(ctx, self.access_ttl_seconds, ACCESS_TOKEN_TYPE, None)?;
        let refresh_jti = Uuid::new_v4().to_string();
        let refresh_token = self.encode(
            ctx,
            self.refresh_ttl_seconds,
            REFRESH_TOKEN_TYPE,
            Some(refresh_jti.clone()),
        )?;
        let expires_at = now_epoch_seconds() + self.access_ttl_seconds;
        Ok(AuthTokens {
            access_token,
            refresh_token,
            refresh_jti,
            expires_at,
        })
    }

    /// 解析 access token。
    pub fn decode_access(&self, token: &str) -> Result<SessionContext, AuthError> {
        let claims = self.decode_typed(token, ACCESS_TOKEN_TYPE)?;
        claims.into_context()
    }

    /// 解析 refresh token，同时返回其 jti。
    pub fn decode_refresh(&self, token: &str) -> Result<(SessionContext, String), AuthError> {
        let mut claims = self.decode_typed(token, REFRESH_TOKEN_TYPE)?;
        let jti = claims.jti.take().ok_or(AuthError::TokenInvalid)?;
        Ok((claims.into_context()?, jti))
    }

    fn encode(
        &self,
        ctx: &SessionContext,
        ttl_seconds: u64,
        token_type: &str,
        jti: Option<String>,
    ) -> Result<String, AuthError> {
        let exp = (now_epoch_seconds() + ttl_seconds) as usize;
        let claims = Claims {
            sub: ctx.user_id.clone(),
            email: ctx.email.clone(),
            role: ctx.role.as_str().to_string(),
            exp,
            token_type: token_type.to_string(),
            jti,
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|err| AuthError::Internal(err.to_string()))
    }

    /// 解码并校验 token 类型。
    fn decode_typed(&self, token: &str, expected_type: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let decoded = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(map_jwt_error)?;
        if decoded.claims.token_type != expected_type {
            return Err(AuthError::TokenInvalid);
        }
        Ok(decoded.claims)
    }
}

/// 当前时间戳（秒）。
fn now_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// 将 jwt 库错误映射为业务错误。
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid,
    }
}
