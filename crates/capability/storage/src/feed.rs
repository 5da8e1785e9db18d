//! 聚合通知流
//!
//! 系统通知（`Notification`）与课表提醒（`ScheduleNotification`）合并为一个列表：
//! - 系统通知只取广播（无 `user_id`）或发给当前用户的
//! - 按创建时间倒序，时间相同按 id 排序
//! - 标记已读写回各自的集合

use crate::campus::CampusStore;
use crate::error::StorageError;
use domain::{
    FeedItem, Notification, NotificationPatch, ScheduleNotification, ScheduleNotificationPatch,
};

/// 合并两类通知
pub fn merge_feed(
    notifications: &[Notification],
    schedule: &[ScheduleNotification],
    user_id: Option<&str>,
) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = notifications
        .iter()
        .filter(|item| visible_to(item, user_id))
        .map(FeedItem::from)
        .chain(schedule.iter().map(FeedItem::from))
        .collect();
    items.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    items
}

/// 未读条数
pub fn unread_count(items: &[FeedItem]) -> usize {
    items.iter().filter(|item| !item.read).count()
}

/// 广播对所有人可见；定向通知只对收件人可见
pub fn visible_to(item: &Notification, user_id: Option<&str>) -> bool {
    match (item.user_id.as_deref(), user_id) {
        (None, _) => true,
        (Some(owner), Some(user_id)) => owner == user_id,
        (Some(_), None) => false,
    }
}

fn read_notification() -> NotificationPatch {
    NotificationPatch {
        read: Some(true),
        ..Default::default()
    }
}

fn read_schedule_notification() -> ScheduleNotificationPatch {
    ScheduleNotificationPatch {
        read: Some(true),
        ..Default::default()
    }
}

impl CampusStore {
    pub async fn notification_feed(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<FeedItem>, StorageError> {
        let notifications = self.records::<Notification>().list().await?;
        let schedule = self.records::<ScheduleNotification>().list().await?;
        Ok(merge_feed(&notifications, &schedule, user_id))
    }

    /// 标记单条已读：先查系统通知，再查课表提醒。
    ///
    /// 发给其他用户的系统通知按不存在处理。
    pub async fn mark_feed_item_read(
        &self,
        item_id: &str,
        user_id: Option<&str>,
    ) -> Result<FeedItem, StorageError> {
        let notifications = self.records::<Notification>();
        if let Some(item) = notifications
            .list()
            .await?
            .into_iter()
            .find(|item| item.id == item_id)
        {
            if !visible_to(&item, user_id) {
                tracing::warn!(item_id, "feed item not visible to caller");
                campus_telemetry::record_not_found();
                return Err(StorageError::not_found("notification", item_id));
            }
            let updated = notifications.update(item_id, read_notification()).await?;
            return Ok(FeedItem::from(&updated));
        }
        let schedule = self.records::<ScheduleNotification>();
        if schedule.list().await?.iter().any(|item| item.id == item_id) {
            let updated = schedule
                .update(item_id, read_schedule_notification())
                .await?;
            return Ok(FeedItem::from(&updated));
        }
        campus_telemetry::record_not_found();
        Err(StorageError::not_found("notification", item_id))
    }

    /// 标记当前用户可见的全部未读条目，返回更新条数
    pub async fn mark_feed_read_all(&self, user_id: Option<&str>) -> Result<usize, StorageError> {
        let mut updated = 0;
        let notifications = self.records::<Notification>();
        for item in notifications.list().await? {
            if !item.read && visible_to(&item, user_id) {
                notifications.update(&item.id, read_notification()).await?;
                updated += 1;
            }
        }
        let schedule = self.records::<ScheduleNotification>();
        for item in schedule.list().await? {
            if !item.read {
                schedule
                    .update(&item.id, read_schedule_notification())
                    .await?;
                updated += 1;
            }
        }
        tracing::debug!(updated, "feed marked read");
        Ok(updated)
    }
}
