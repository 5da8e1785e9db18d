//! 认证能力：登录、JWT 生成与校验、客户端会话门面。

mod jwt;
mod password;
pub mod session;

use async_trait::async_trait;
use campus_storage::{StorageError, UserStore};
use campus_telemetry::{record_login_failure, record_login_success};
use domain::{SessionContext, User};
use std::sync::Arc;

pub use jwt::JwtManager;
pub use password::{PasswordVerdict, check_password, hash_password, is_hashed};
pub use session::{
    DEFAULT_LOGOUT_REDIRECT, FileSessionStorage, MemorySessionStorage, SESSION_USER_KEY, Session,
    SessionError, SessionStatus, SessionStorage,
};

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("token expired")]
    TokenExpired,
    #[error("token invalid")]
    TokenInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

/// 登录/刷新返回的 token 结构。
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub refresh_jti: String,
    pub expires_at: u64,
}

/// 认证服务实现（基于 UserStore + JWT）。
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    jwt: JwtManager,
}

impl AuthService {
    /// 创建认证服务实例。
    pub fn new(user_store: Arc<dyn UserStore>, jwt: JwtManager) -> Self {
        Self { user_store, jwt }
    }

    /// 登录校验并签发 token。
    ///
    /// 只按邮箱精确查找一次，账户不存在与口令错误返回同一个错误。
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, AuthTokens), AuthError> {
        let account = match self.user_store.find_by_email(email).await? {
            Some(account) => account,
            None => {
                record_login_failure();
                tracing::warn!(email, "login rejected: unknown account");
                return Err(AuthError::InvalidCredentials);
            }
        };
        let verdict = check_password(&account.password, password)?;
        if !verdict.is_match() {
            record_login_failure();
            tracing::warn!(user_id = %account.user.id, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }
        let user_id = account.user.id.as_str();
        if let Some(password_hash) = verdict.into_rehash() {
            tracing::info!(user_id, "seeded password replaced by argon2 hash");
            self.user_store
                .update_password_hash(user_id, &password_hash)
                .await?;
        }
        let user = self
            .user_store
            .touch_last_login(user_id, chrono::Utc::now())
            .await?;
        let ctx = SessionContext::new(&user.id, &user.email, user.role);
        let tokens = self.jwt.issue_tokens(&ctx)?;
        self.user_store
            .set_refresh_jti(&user.id, Some(&tokens.refresh_jti))
            .await?;
        record_login_success();
        tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");
        Ok((user, tokens))
    }

    /// 校验 access token 并提取 SessionContext。
    pub fn verify_access_token(&self, token: &str) -> Result<SessionContext, AuthError> {
        self.jwt.decode_access(token)
    }

    /// 使用 refresh token 换取新 token；旧 refresh token 随即失效。
    pub async fn refresh(&self, token: &str) -> Result<AuthTokens, AuthError> {
        let (ctx, jti) = self.jwt.decode_refresh(token)?;
        let stored = match self.user_store.get_refresh_jti(&ctx.user_id).await {
            Ok(stored) => stored,
            Err(err) if err.is_not_found() => return Err(AuthError::TokenInvalid),
            Err(err) => return Err(err.into()),
        };
        if stored.as_deref() != Some(jti.as_str()) {
            tracing::warn!(user_id = %ctx.user_id, "refresh rejected: token rotated out");
            return Err(AuthError::TokenInvalid);
        }

        let tokens = self.jwt.issue_tokens(&ctx)?;
        self.user_store
            .set_refresh_jti(&ctx.user_id, Some(&tokens.refresh_jti))
            .await?;
        Ok(tokens)
    }

    /// 注销：解除当前 refresh token 绑定。
    pub async fn logout(&self, ctx: &SessionContext) -> Result<(), AuthError> {
        match self.user_store.set_refresh_jti(&ctx.user_id, None).await {
            Ok(()) => {
                tracing::info!(user_id = %ctx.user_id, "logout");
                Ok(())
            }
            Err(err) if err.is_not_found() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// 当前登录用户资料。
    pub async fn current_user(&self, ctx: &SessionContext) -> Result<User, AuthError> {
        self.user_store
            .find_user(&ctx.user_id)
            .await
            .map_err(|err| match err {
                StorageError::NotFound { .. } => AuthError::TokenInvalid,
                other => other.into(),
            })
    }
}

/// 认证能力 trait，便于替换实现与测试。
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<(User, AuthTokens), AuthError>;
    fn verify_access_token(&self, token: &str) -> Result<SessionContext, AuthError>;
    async fn refresh(&self, token: &str) -> Result<AuthTokens, AuthError>;
    async fn logout(&self, ctx: &SessionContext) -> Result<(), AuthError>;
}

#[async_trait]
impl Authenticator for AuthService {
    async fn login(&self, email: &str, password: &str) -> Result<(User, AuthTokens), AuthError> {
        AuthService::login(self, email, password).await
    }

    fn verify_access_token(&self, token: &str) -> Result<SessionContext, AuthError> {
        AuthService::verify_access_token(self, token)
    }

    async fn refresh(&self, token: &str) -> Result<AuthTokens, AuthError> {
        AuthService::refresh(self, token).await
    }

    async fn logout(&self, ctx: &SessionContext) -> Result<(), AuthError> {
        AuthService::logout(self, ctx).await
    }
}
