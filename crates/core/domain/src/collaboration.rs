//! 协作空间实体：小组、组内消息、共享文件、任务。

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationGroupDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationGroupPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub course_id: Option<Option<String>>,
    pub members: Option<Vec<String>>,
}

impl CollaborationGroup {
    pub fn from_draft(id: String, draft: CollaborationGroupDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            course_id: draft.course_id,
            members: draft.members,
            created_at: now,
        }
    }

    pub fn apply(&mut self, patch: CollaborationGroupPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(course_id) = patch.course_id {
            self.course_id = course_id;
        }
        if let Some(members) = patch.members {
            self.members = members;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationMessage {
    pub id: String,
    pub group_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationMessageDraft {
    pub group_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationMessagePatch {
    pub body: Option<String>,
}

impl CollaborationMessage {
    pub fn from_draft(id: String, draft: CollaborationMessageDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            group_id: draft.group_id,
            sender_id: draft.sender_id,
            sender_name: draft.sender_name,
            body: draft.body,
            sent_at: now,
        }
    }

    pub fn apply(&mut self, patch: CollaborationMessagePatch) {
        if let Some(body) = patch.body {
            self.body = body;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationFile {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub url: String,
    pub size_bytes: u64,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationFileDraft {
    pub group_id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub size_bytes: u64,
    pub uploaded_by: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationFilePatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub size_bytes: Option<u64>,
}

impl CollaborationFile {
    pub fn from_draft(id: String, draft: CollaborationFileDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            group_id: draft.group_id,
            name: draft.name,
            url: draft.url,
            size_bytes: draft.size_bytes,
            uploaded_by: draft.uploaded_by,
            uploaded_at: now,
        }
    }

    pub fn apply(&mut self, patch: CollaborationFilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(size_bytes) = patch.size_bytes {
            self.size_bytes = size_bytes;
        }
    }
}

/// 协作任务状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationTask {
    pub id: String,
    pub group_id: String,
    pub title: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationTaskDraft {
    pub group_id: String,
    pub title: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationTaskPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub assignee: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub due_date: Option<Option<NaiveDate>>,
    pub status: Option<TaskStatus>,
}

impl CollaborationTask {
    pub fn from_draft(id: String, draft: CollaborationTaskDraft) -> Self {
        Self {
            id,
            group_id: draft.group_id,
            title: draft.title,
            assignee: draft.assignee,
            due_date: draft.due_date,
            status: draft.status,
        }
    }

    pub fn apply(&mut self, patch: CollaborationTaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
