//! 存储接口 Trait 定义
//!
//! - Record：实体记录的存储约定（id、前缀、草稿构造、补丁合并、校验）
//! - RecordStore：通用实体 CRUD 接口
//! - UserStore：用户账户存储（含口令与 refresh token 绑定）
//!
//! 设计原则：
//! - 所有接口返回 StorageError，不存在统一为 `StorageError::NotFound`
//! - 使用 async_trait 支持动态分发，便于以真实后端替换内存实现

use crate::error::StorageError;
use crate::models::UserAccount;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{User, UserDraft, UserPatch};

/// 可存储的实体记录。
pub trait Record: Clone + Send + Sync + 'static {
    /// 创建输入
    type Draft: Send + 'static;
    /// 更新输入（浅合并）
    type Patch: Send + 'static;

    /// 实体名，用于错误信息与日志
    const KIND: &'static str;
    /// 存储生成 id 的前缀
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;

    /// 由存储分配的 id 与草稿构造记录。
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// 合并补丁中出现的字段。
    fn apply_patch(&mut self, patch: Self::Patch);

    /// 写入前校验（创建与更新后的完整记录）。
    fn validate(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// 实体存储接口
///
/// 每个操作先等待模拟延迟，再读写内存集合。
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// 按插入顺序返回全部记录的副本
    async fn list(&self) -> Result<Vec<R>, StorageError>;

    /// 查找指定记录
    async fn find(&self, id: &str) -> Result<R, StorageError>;

    /// 创建新记录（id 由存储分配）
    async fn create(&self, draft: R::Draft) -> Result<R, StorageError>;

    /// 浅合并更新
    async fn update(&self, id: &str, patch: R::Patch) -> Result<R, StorageError>;

    /// 删除记录
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}

/// 用户存储接口
///
/// 对外只返回不含口令的 `User`；登录校验通过 `find_by_email` 取完整账户。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>, StorageError>;

    /// 查找指定用户
    async fn find_user(&self, user_id: &str) -> Result<User, StorageError>;

    /// 根据邮箱查找账户（忽略大小写）
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, StorageError>;

    /// 创建用户（邮箱唯一）
    async fn create_user(&self, draft: UserDraft) -> Result<User, StorageError>;

    /// 更新用户资料
    async fn update_user(&self, user_id: &str, patch: UserPatch) -> Result<User, StorageError>;

    /// 删除用户
    async fn delete_user(&self, user_id: &str) -> Result<(), StorageError>;

    /// 替换口令哈希（明文口令升级为 argon2）
    async fn update_password_hash(
        &self,
        user_id: &str,
        password_hash: &str,
    ) -> Result<(), StorageError>;

    /// 记录最近登录时间
    async fn touch_last_login(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<User, StorageError>;

    /// 绑定或清除当前有效的 refresh token id
    async fn set_refresh_jti(&self, user_id: &str, jti: Option<&str>) -> Result<(), StorageError>;

    /// 读取当前有效的 refresh token id
    async fn get_refresh_jti(&self, user_id: &str) -> Result<Option<String>, StorageError>;
}
