//! 存储层错误类型
//!
//! 所有存储操作统一返回 `Result<T, StorageError>`：
//! - 记录不存在：`NotFound`（查询、更新、删除一致）
//! - 输入不合法：`Validation`
//! - 唯一性或状态冲突：`Conflict`
//! - 锁中毒等内部错误：`Internal`

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl StorageError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn lock_failed() -> Self {
        Self::Internal("lock failed".to_string())
    }
}
