//! 用户内存存储实现
//!
//! 功能：
//! - 内置演示账户（见 `fixtures::accounts`）
//! - 邮箱唯一（忽略大小写）
//! - 口令哈希升级、最近登录时间、refresh token 绑定

use crate::error::StorageError;
use crate::in_memory::SimulatedLatency;
use crate::models::{UserAccount, validate_user};
use crate::traits::UserStore;
use campus_telemetry::{record_not_found, record_store_read, record_store_write};
use chrono::{DateTime, Utc};
use domain::{User, UserDraft, UserPatch};
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

const KIND: &str = "user";

/// 用户内存存储
///
/// 使用 RwLock + Vec 保持插入顺序。
pub struct InMemoryUserStore {
    accounts: RwLock<Vec<UserAccount>>,
    sequence: AtomicU64,
    latency: SimulatedLatency,
}

impl InMemoryUserStore {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_accounts(Vec::new(), latency)
    }

    pub fn with_accounts(accounts: Vec<UserAccount>, latency: SimulatedLatency) -> Self {
        let sequence = AtomicU64::new(accounts.len() as u64);
        Self {
            accounts: RwLock::new(accounts),
            sequence,
            latency,
        }
    }

    /// 内置演示账户（无延迟）
    pub fn with_demo_accounts() -> Self {
        Self::with_accounts(crate::fixtures::accounts(), SimulatedLatency::none())
    }

    fn next_id(&self, existing: &[UserAccount]) -> String {
        loop {
            let value = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
            let id = format!("U{value:03}");
            if !existing.iter().any(|account| account.user.id == id) {
                return id;
            }
        }
    }

    /// 在写锁内修改指定账户
    fn modify<T>(
        &self,
        user_id: &str,
        f: impl FnOnce(&mut UserAccount) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        let account = match accounts.iter_mut().find(|item| item.user.id == user_id) {
            Some(account) => account,
            None => {
                record_not_found();
                return Err(StorageError::not_found(KIND, user_id));
            }
        };
        let value = f(account)?;
        record_store_write();
        Ok(value)
    }
}

fn email_taken(accounts: &[UserAccount], email: &str, except: Option<&str>) -> bool {
    accounts.iter().any(|item| {
        item.user.email.eq_ignore_ascii_case(email.trim()) && Some(item.user.id.as_str()) != except
    })
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        self.latency.wait().await;
        record_store_read();
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StorageError::lock_failed())?;
        Ok(accounts.iter().map(|item| item.user.clone()).collect())
    }

    async fn find_user(&self, user_id: &str) -> Result<User, StorageError> {
        self.latency.wait().await;
        record_store_read();
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StorageError::lock_failed())?;
        match accounts.iter().find(|item| item.user.id == user_id) {
            Some(account) => Ok(account.user.clone()),
            None => {
                record_not_found();
                Err(StorageError::not_found(KIND, user_id))
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, StorageError> {
        self.latency.wait().await;
        record_store_read();
        let email = email.trim();
        Ok(self
            .accounts
            .read()
            .ok()
            .and_then(|accounts| {
                accounts
                    .iter()
                    .find(|item| item.user.email.eq_ignore_ascii_case(email))
                    .cloned()
            }))
    }

    async fn create_user(&self, mut draft: UserDraft) -> Result<User, StorageError> {
        self.latency.wait().await;
        draft.email = draft.email.trim().to_string();
        if draft.password.is_empty() {
            return Err(StorageError::validation("password required"));
        }
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        if email_taken(&accounts, &draft.email, None) {
            return Err(StorageError::Conflict(format!(
                "email {} already registered",
                draft.email
            )));
        }
        let id = self.next_id(&accounts);
        let user = User::from_draft(id, &draft);
        validate_user(&user)?;
        accounts.push(UserAccount {
            user: user.clone(),
            password: draft.password,
            refresh_jti: None,
        });
        record_store_write();
        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn update_user(&self, user_id: &str, mut patch: UserPatch) -> Result<User, StorageError> {
        self.latency.wait().await;
        if let Some(email) = patch.email.as_mut() {
            *email = email.trim().to_string();
        }
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        if let Some(email) = patch.email.as_deref() {
            if email_taken(&accounts, email, Some(user_id)) {
                return Err(StorageError::Conflict(format!("email {email} already registered")));
            }
        }
        let account = match accounts.iter_mut().find(|item| item.user.id == user_id) {
            Some(account) => account,
            None => {
                record_not_found();
                return Err(StorageError::not_found(KIND, user_id));
            }
        };
        let mut merged = account.user.clone();
        merged.apply(patch);
        validate_user(&merged)?;
        account.user = merged.clone();
        record_store_write();
        Ok(merged)
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), StorageError> {
        self.latency.wait().await;
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StorageError::lock_failed())?;
        match accounts.iter().position(|item| item.user.id == user_id) {
            Some(index) => {
                accounts.remove(index);
                record_store_write();
                Ok(())
            }
            None => {
                record_not_found();
                Err(StorageError::not_found(KIND, user_id))
            }
        }
    }

    async fn update_password_hash(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<(), StorageError> {
        self.latency.wait().await;
        self.modify(user_id, |account| {
            account.password = password_hash.to_string();
            Ok(())
        })
    }

    async fn touch_last_login(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<User, StorageError> {
        self.latency.wait().await;
        self.modify(user_id, |account| {
            account.user.last_login = Some(at);
            Ok(account.user.clone())
        })
    }

    async fn set_refresh_jti(&self, user_id: &str, jti: Option<&str>) -> Result<(), StorageError> {
        self.latency.wait().await;
        self.modify(user_id, |account| {
            account.refresh_jti = jti.map(str::to_string);
            Ok(())
        })
    }

    async fn get_refresh_jti(&self, user_id: &str) -> Result<Option<String>, StorageError> {
        self.latency.wait().await;
        record_store_read();
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StorageError::lock_failed())?;
        match accounts.iter().find(|item| item.user.id == user_id) {
            Some(account) => Ok(account.refresh_jti.clone()),
            None => Err(StorageError::not_found(KIND, user_id)),
        }
    }
}
