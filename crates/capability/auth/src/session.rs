//! 客户端会话门面
//!
//! 维护当前登录用户、token 与状态机：
//! `Unauthenticated → Loading → Authenticated`，失败原因单独放在 `last_error`。
//! 失败的操作不改动已有的用户、token 与存储，状态回到操作前的值。
//! 用户资料以 JSON 持久化在 `campus.session.user` 键下；注册与资料修改只写本地，
//! 不会进入服务端用户存储。

use crate::{AuthError, AuthTokens, Authenticator};
use domain::{User, UserDraft, UserPatch};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// 会话用户的持久化键。
pub const SESSION_USER_KEY: &str = "campus.session.user";
/// 未提供注销回调时的默认跳转。
pub const DEFAULT_LOGOUT_REDIRECT: &str = "/login";

/// 会话错误。
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("not authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// 会话状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    Loading,
    Authenticated,
}

/// 会话键值存储。
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// 进程内存储（测试与无盘场景）。
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_failed() -> SessionError {
    SessionError::Storage("lock failed".to_string())
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self.entries.read().map_err(|_| lock_failed())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.write().map_err(|_| lock_failed())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.write().map_err(|_| lock_failed())?;
        entries.remove(key);
        Ok(())
    }
}

/// 文件存储：目录下每个键一个 JSON 文件。
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|ch| if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' { ch } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

fn io_error(err: std::io::Error) -> SessionError {
    SessionError::Storage(err.to_string())
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir).map_err(io_error)?;
        std::fs::write(self.path_for(key), value).map_err(io_error)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}

/// 客户端会话。
pub struct Session<S: SessionStorage> {
    storage: S,
    authenticator: Arc<dyn Authenticator>,
    status: SessionStatus,
    user: Option<User>,
    tokens: Option<AuthTokens>,
    last_error: Option<String>,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            storage,
            authenticator,
            status: SessionStatus::Unauthenticated,
            user: None,
            tokens: None,
            last_error: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|tokens| tokens.access_token.as_str())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 从存储恢复用户；内容损坏时清除该键并回到未登录。
    pub fn restore(&mut self) -> Result<Option<&User>, SessionError> {
        self.status = SessionStatus::Loading;
        let raw = match self.storage.get(SESSION_USER_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                self.fail(err.to_string());
                return Err(err);
            }
        };
        let user = match raw.map(|raw| serde_json::from_str::<User>(&raw)).transpose() {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "discarding corrupt session");
                self.storage.remove(SESSION_USER_KEY)?;
                self.user = None;
                self.tokens = None;
                self.fail(err.to_string());
                return Ok(None);
            }
        };
        self.status = if user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        };
        self.user = user;
        Ok(self.user.as_ref())
    }

    /// 登录并持久化用户。
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, SessionError> {
        self.status = SessionStatus::Loading;
        self.last_error = None;
        let (user, tokens) = match self.authenticator.login(email, password).await {
            Ok(result) => result,
            Err(err) => {
                self.fail(err.to_string());
                return Err(err.into());
            }
        };
        self.persist(&user)?;
        self.tokens = Some(tokens);
        self.sign_in(user.clone());
        Ok(user)
    }

    /// 本地注册：生成 uuid 作为 id，只写入会话存储，随即视为已登录。
    pub fn register(&mut self, draft: UserDraft) -> Result<User, SessionError> {
        self.status = SessionStatus::Loading;
        self.last_error = None;
        let user = User::from_draft(uuid::Uuid::new_v4().to_string(), &draft);
        self.persist(&user)?;
        self.tokens = None;
        self.sign_in(user.clone());
        Ok(user)
    }

    /// 注销并返回默认跳转地址。
    pub async fn logout(&mut self) -> Result<&'static str, SessionError> {
        self.clear().await?;
        Ok(DEFAULT_LOGOUT_REDIRECT)
    }

    /// 注销后执行回调，替代默认跳转。
    pub async fn logout_with<F: FnOnce()>(&mut self, callback: F) -> Result<(), SessionError> {
        self.clear().await?;
        callback();
        Ok(())
    }

    /// 浅合并资料并写回本地存储。
    pub fn update_profile(&mut self, patch: UserPatch) -> Result<User, SessionError> {
        let mut user = self.user.clone().ok_or(SessionError::NotAuthenticated)?;
        user.apply(patch);
        self.persist(&user)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.status = SessionStatus::Authenticated;
    }

    /// 记录失败并按内存中的用户回落状态
    fn fail(&mut self, message: String) {
        self.status = if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        };
        self.last_error = Some(message);
    }

    fn persist(&mut self, user: &User) -> Result<(), SessionError> {
        let result = serde_json::to_string(user)
            .map_err(SessionError::from)
            .and_then(|raw| self.storage.set(SESSION_USER_KEY, &raw));
        if let Err(err) = &result {
            self.fail(err.to_string());
        }
        result
    }

    /// 清除本地状态；服务端 refresh 绑定尽力解除，失败只记日志。
    async fn clear(&mut self) -> Result<(), SessionError> {
        if let Some(tokens) = self.tokens.take() {
            let revoked = match self.authenticator.verify_access_token(&tokens.access_token) {
                Ok(ctx) => self.authenticator.logout(&ctx).await,
                Err(err) => Err(err),
            };
            if let Err(err) = revoked {
                tracing::warn!(error = %err, "server logout skipped");
            }
        }
        self.storage.remove(SESSION_USER_KEY)?;
        self.user = None;
        self.status = SessionStatus::Unauthenticated;
        self.last_error = None;
        Ok(())
    }
}
