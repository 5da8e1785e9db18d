//! 设施预约审批、消息已读、协作小组子资源
//!
//! - POST /reservations/{id}/approve|reject
//! - GET /reservations/status/{status}
//! - POST /messages/{id}/read
//! - GET /groups/{id}/messages|files|tasks

use crate::AppState;
use crate::middleware::authorize;
use crate::utils::{ok, storage_error};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};
use domain::{ReservationStatus, permissions};

async fn review_reservation(
    state: AppState,
    id: String,
    headers: HeaderMap,
    status: ReservationStatus,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_WRITE) {
        return response;
    }
    match state.store.set_reservation_status(&id, status).await {
        Ok(reservation) => ok(reservation),
        Err(err) => storage_error(err),
    }
}

pub async fn approve_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    review_reservation(state, id, headers, ReservationStatus::Approved).await
}

pub async fn reject_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    review_reservation(state, id, headers, ReservationStatus::Rejected).await
}

pub async fn reservations_by_status(
    State(state): State<AppState>,
    Path(status): Path<ReservationStatus>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.reservations_by_status(status).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

/// 标记消息已读（只读角色也可操作）
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.mark_message_read(&id).await {
        Ok(message) => ok(message),
        Err(err) => storage_error(err),
    }
}

pub async fn group_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.group_messages(&id).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

pub async fn group_files(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.group_files(&id).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

pub async fn group_tasks(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.group_tasks(&id).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}
