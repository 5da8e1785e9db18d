//! 通用实体 CRUD handlers
//!
//! 每个实体路径共用同一组处理函数：
//! - GET /{entity} - 全量列表（插入顺序）
//! - GET /{entity}/page?q=&page=&pageSize= - 过滤 + 分页
//! - GET /{entity}/{id} - 详情
//! - POST /{entity} - 创建
//! - PUT /{entity}/{id} - 浅合并更新
//! - DELETE /{entity}/{id} - 删除
//!
//! 读取需要 CAMPUS.READ，写入需要 CAMPUS.WRITE（admin/staff）。

use crate::AppState;
use crate::middleware::authorize;
use crate::utils::{created, json_body, list_query, ok, page_to_dto, storage_error};
use api_contract::ListQueryParams;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::HeaderMap,
    response::Response,
};
use campus_listing::{Searchable, list_page};
use campus_storage::{CampusStore, Collection, Record};
use domain::permissions;
use serde::{Serialize, de::DeserializeOwned};

/// 列出全部记录
pub async fn list_records<R>(State(state): State<AppState>, headers: HeaderMap) -> Response
where
    R: Record + Serialize,
    CampusStore: Collection<R>,
{
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.records::<R>().list().await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

/// 过滤并分页
pub async fn page_records<R>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQueryParams>,
) -> Response
where
    R: Record + Serialize + Searchable,
    CampusStore: Collection<R>,
{
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    let query = list_query(params, &state.listing);
    match state.store.records::<R>().list().await {
        Ok(items) => ok(page_to_dto(
            list_page(items, &query),
            state.listing.page_window,
        )),
        Err(err) => storage_error(err),
    }
}

/// 获取详情
pub async fn get_record<R>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    R: Record + Serialize,
    CampusStore: Collection<R>,
{
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.records::<R>().find(&id).await {
        Ok(record) => ok(record),
        Err(err) => storage_error(err),
    }
}

/// 创建记录
pub async fn create_record<R>(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<R::Draft>, JsonRejection>,
) -> Response
where
    R: Record + Serialize,
    R::Draft: DeserializeOwned,
    CampusStore: Collection<R>,
{
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_WRITE) {
        return response;
    }
    let draft = match json_body(body) {
        Ok(draft) => draft,
        Err(response) => return response,
    };
    match state.store.records::<R>().create(draft).await {
        Ok(record) => created(record),
        Err(err) => storage_error(err),
    }
}

/// 更新记录
pub async fn update_record<R>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<R::Patch>, JsonRejection>,
) -> Response
where
    R: Record + Serialize,
    R::Patch: DeserializeOwned,
    CampusStore: Collection<R>,
{
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_WRITE) {
        return response;
    }
    let patch = match json_body(body) {
        Ok(patch) => patch,
        Err(response) => return response,
    };
    match state.store.records::<R>().update(&id, patch).await {
        Ok(record) => ok(record),
        Err(err) => storage_error(err),
    }
}

/// 删除记录
pub async fn delete_record<R>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    R: Record,
    CampusStore: Collection<R>,
{
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_WRITE) {
        return response;
    }
    match state.store.records::<R>().delete(&id).await {
        Ok(()) => ok(()),
        Err(err) => storage_error(err),
    }
}
