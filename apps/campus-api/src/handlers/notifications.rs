//! 聚合通知流 handlers
//!
//! - GET /notifications/feed - 当前用户可见的系统通知 + 课表提醒，按时间倒序
//! - POST /notifications/feed/{id}/read - 标记单条已读
//! - POST /notifications/feed/read-all - 标记当前用户可见的全部条目已读
//!
//! 只需登录，不要求写权限。
//!
//! 系统通知本身的读取（GET /notifications、/notifications/page、/notifications/{id}）
//! 需要 CAMPUS.READ；没有 CAMPUS.WRITE 的角色只能看到广播和发给自己的通知。

use crate::AppState;
use crate::middleware::{authorize, require_session};
use crate::utils::{list_query, not_found_error, ok, page_to_dto, storage_error};
use api_contract::{FeedDto, ListQueryParams, UpdatedCountDto};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use campus_listing::list_page;
use campus_storage::{StorageError, unread_count, visible_to};
use domain::{Notification, SessionContext, permissions};

/// 按调用者过滤系统通知；管理角色可见全部
async fn notifications_for(
    state: &AppState,
    ctx: &SessionContext,
) -> Result<Vec<Notification>, StorageError> {
    let items = state.store.records::<Notification>().list().await?;
    if ctx.has_permission(permissions::CAMPUS_WRITE) {
        return Ok(items);
    }
    Ok(items
        .into_iter()
        .filter(|item| visible_to(item, Some(&ctx.user_id)))
        .collect())
}

pub async fn list_notifications(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match authorize(&state, &headers, permissions::CAMPUS_READ) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match notifications_for(&state, &ctx).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

pub async fn page_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQueryParams>,
) -> Response {
    let ctx = match authorize(&state, &headers, permissions::CAMPUS_READ) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    let query = list_query(params, &state.listing);
    match notifications_for(&state, &ctx).await {
        Ok(items) => ok(page_to_dto(
            list_page(items, &query),
            state.listing.page_window,
        )),
        Err(err) => storage_error(err),
    }
}

pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ctx = match authorize(&state, &headers, permissions::CAMPUS_READ) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match notifications_for(&state, &ctx).await {
        Ok(items) => match items.into_iter().find(|item| item.id == id) {
            Some(item) => ok(item),
            None => {
                campus_telemetry::record_not_found();
                not_found_error(format!("notification '{id}' not found"))
            }
        },
        Err(err) => storage_error(err),
    }
}

pub async fn get_feed(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.store.notification_feed(Some(&ctx.user_id)).await {
        Ok(items) => {
            let unread = unread_count(&items);
            ok(FeedDto { items, unread })
        }
        Err(err) => storage_error(err),
    }
}

pub async fn mark_feed_item_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state
        .store
        .mark_feed_item_read(&id, Some(&ctx.user_id))
        .await
    {
        Ok(item) => ok(item),
        Err(err) => storage_error(err),
    }
}

pub async fn mark_feed_read_all(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let ctx = match require_session(&state, &headers) {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    match state.store.mark_feed_read_all(Some(&ctx.user_id)).await {
        Ok(updated) => ok(UpdatedCountDto { updated }),
        Err(err) => storage_error(err),
    }
}
