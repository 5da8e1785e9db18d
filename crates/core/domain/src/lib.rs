//! 校园管理领域模型：实体记录、创建草稿（Draft）、更新补丁（Patch）与会话上下文。
//!
//! 实体均为扁平记录，以字符串 `id` 为主键，关联关系以冗余的 id + 名称对保存
//! （例如选课记录同时保存 `student_id` 与 `student_name`），更新不会级联。

pub mod academics;
pub mod collaboration;
pub mod communication;
pub mod facilities;
pub mod nullable;
pub mod people;
pub mod permissions;

pub use academics::*;
pub use collaboration::*;
pub use communication::*;
pub use facilities::*;
pub use people::*;

use serde::{Deserialize, Serialize};

/// 用户角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Lecturer,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Lecturer => "lecturer",
            Role::Staff => "staff",
        }
    }

    /// 解析角色字符串（忽略大小写）。
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "student" => Some(Role::Student),
            "lecturer" | "faculty" => Some(Role::Lecturer),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    /// 角色默认拥有的权限码。
    pub fn permissions(&self) -> Vec<String> {
        permissions::codes_for_role(*self)
            .iter()
            .map(|code| (*code).to_string())
            .collect()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 会话上下文：已认证调用方的身份与权限，贯穿 handler 与存储层。
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub permissions: Vec<String>,
}

impl SessionContext {
    /// 按角色默认权限构造上下文。
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            role,
            permissions: role.permissions(),
        }
    }

    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.iter().any(|item| item == code)
    }
}
