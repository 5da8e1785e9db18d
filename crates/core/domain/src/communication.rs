//! 活动与消息类实体：校园活动、站内信、通知、课表事件与课表提醒。

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// 校园活动。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer: String,
    pub category: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub organizer: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_event_status")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

fn default_event_status() -> String {
    "upcoming".to_string()
}

impl Event {
    pub fn from_draft(id: String, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            organizer: draft.organizer,
            category: draft.category,
            status: draft.status,
        }
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(organizer) = patch.organizer {
            self.organizer = organizer;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// 站内信。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_id: String,
    pub recipient_name: String,
    pub subject: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDraft {
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_id: String,
    pub recipient_name: String,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    /// 缺省为创建时刻
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePatch {
    pub subject: Option<String>,
    pub body: Option<String>,
    pub read: Option<bool>,
}

impl Message {
    pub fn from_draft(id: String, draft: MessageDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            sender_id: draft.sender_id,
            sender_name: draft.sender_name,
            recipient_id: draft.recipient_id,
            recipient_name: draft.recipient_name,
            subject: draft.subject,
            body: draft.body,
            sent_at: draft.sent_at.unwrap_or(now),
            read: false,
        }
    }

    pub fn apply(&mut self, patch: MessagePatch) {
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}

/// 系统通知。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    /// info | warning | success | error
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    #[serde(default = "default_notification_kind")]
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub kind: Option<String>,
    pub read: Option<bool>,
}

fn default_notification_kind() -> String {
    "info".to_string()
}

impl Notification {
    pub fn from_draft(id: String, draft: NotificationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            message: draft.message,
            kind: draft.kind,
            created_at: draft.created_at.unwrap_or(now),
            read: false,
            user_id: draft.user_id,
        }
    }

    pub fn apply(&mut self, patch: NotificationPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}

/// 课表事件（上课、考试、答疑等时间段）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course_id: Option<String>,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// none | daily | weekly
    #[serde(default)]
    pub recurrence: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventDraft {
    pub title: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub recurrence: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub course_id: Option<Option<String>>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub recurrence: Option<Option<String>>,
}

impl ScheduleEvent {
    pub fn from_draft(id: String, draft: ScheduleEventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            course_id: draft.course_id,
            location: draft.location,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            recurrence: draft.recurrence,
        }
    }

    pub fn apply(&mut self, patch: ScheduleEventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(course_id) = patch.course_id {
            self.course_id = course_id;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(starts_at) = patch.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(ends_at) = patch.ends_at {
            self.ends_at = ends_at;
        }
        if let Some(recurrence) = patch.recurrence {
            self.recurrence = recurrence;
        }
    }
}

/// 课表提醒。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleNotification {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleNotificationDraft {
    pub event_id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleNotificationPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub read: Option<bool>,
}

impl ScheduleNotification {
    pub fn from_draft(id: String, draft: ScheduleNotificationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            event_id: draft.event_id,
            title: draft.title,
            message: draft.message,
            created_at: draft.created_at.unwrap_or(now),
            read: false,
        }
    }

    pub fn apply(&mut self, patch: ScheduleNotificationPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}

/// 通知来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    System,
    Schedule,
}

/// 聚合通知流条目（系统通知与课表提醒合并后的统一视图）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub source: FeedSource,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl From<&Notification> for FeedItem {
    fn from(item: &Notification) -> Self {
        Self {
            id: item.id.clone(),
            source: FeedSource::System,
            title: item.title.clone(),
            message: item.message.clone(),
            created_at: item.created_at,
            read: item.read,
        }
    }
}

impl From<&ScheduleNotification> for FeedItem {
    fn from(item: &ScheduleNotification) -> Self {
        Self {
            id: item.id.clone(),
            source: FeedSource::Schedule,
            title: item.title.clone(),
            message: item.message.clone(),
            created_at: item.created_at,
            read: item.read,
        }
    }
}
