//! 人员类实体：用户、学生、讲师。

use crate::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户资料（不含口令，可直接返回给客户端）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// 用户创建输入。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// 用户资料更新输入（浅合并，仅覆盖提供的字段）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<Option<String>>,
}

impl User {
    pub fn from_draft(id: String, draft: &UserDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role,
            department: draft.department.clone(),
            profile_image: draft.profile_image.clone(),
            last_login: None,
        }
    }

    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = profile_image;
        }
    }
}

/// 学生记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub year: Option<u8>,
    #[serde(default)]
    pub gpa: Option<f32>,
}

/// 学生创建输入。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub year: Option<u8>,
    #[serde(default)]
    pub gpa: Option<f32>,
}

/// 学生更新输入；`year`、`gpa` 传 `null` 时清空。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub year: Option<Option<u8>>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub gpa: Option<Option<f32>>,
}

impl Student {
    pub fn from_draft(id: String, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            department: draft.department,
            year: draft.year,
            gpa: draft.gpa,
        }
    }

    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(gpa) = patch.gpa {
            self.gpa = gpa;
        }
    }
}

/// 讲师记录（前端亦称 Faculty）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    /// 讲授课程数（手工维护）
    pub courses: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    #[serde(default)]
    pub courses: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub courses: Option<u32>,
}

impl Lecturer {
    pub fn from_draft(id: String, draft: LecturerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            department: draft.department,
            position: draft.position,
            courses: draft.courses,
        }
    }

    pub fn apply(&mut self, patch: LecturerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(courses) = patch.courses {
            self.courses = courses;
        }
    }
}
