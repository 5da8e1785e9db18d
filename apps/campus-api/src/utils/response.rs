//! HTTP 响应辅助函数
//!
//! 所有错误返回统一的 ApiResponse 格式，HTTP 状态码与错误码一一对应：
//! - 401 AUTH.UNAUTHORIZED / 403 AUTH.FORBIDDEN
//! - 400 INVALID.REQUEST / 404 RESOURCE.NOT_FOUND / 409 RESOURCE.CONFLICT
//! - 500 INTERNAL.ERROR

use api_contract::{ApiResponse, PageDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_auth::AuthError;
use campus_listing::{Page, page_numbers};
use campus_storage::StorageError;
use serde::Serialize;

/// 成功响应
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// 创建成功响应
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::success(data))).into_response()
}

/// 认证错误响应
pub fn auth_error(status: StatusCode) -> Response {
    (
        status,
        Json(ApiResponse::<()>::error(
            "AUTH.UNAUTHORIZED",
            "unauthorized",
        )),
    )
        .into_response()
}

/// 禁止访问错误响应
pub fn forbidden_error() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::<()>::error("AUTH.FORBIDDEN", "forbidden")),
    )
        .into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", message.into())),
    )
        .into_response()
}

/// 资源冲突错误响应
pub fn conflict_error(message: impl Into<String>) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ApiResponse::<()>::error("RESOURCE.CONFLICT", message.into())),
    )
        .into_response()
}

fn internal_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("INTERNAL.ERROR", message)),
    )
        .into_response()
}

/// 认证内部错误响应
pub fn internal_auth_error(err: AuthError) -> Response {
    tracing::warn!(error = %err, "auth failure");
    internal_error(err.to_string())
}

/// 存储错误响应
pub fn storage_error(err: StorageError) -> Response {
    tracing::warn!(error = %err, "storage request failed");
    let message = err.to_string();
    match err {
        StorageError::NotFound { .. } => not_found_error(message),
        StorageError::Validation(_) => bad_request_error(message),
        StorageError::Conflict(_) => conflict_error(message),
        StorageError::Internal(_) => internal_error(message),
    }
}

/// 分页结果转 DTO，附带页码控件
pub fn page_to_dto<T>(page: Page<T>, window: usize) -> PageDto<T> {
    let numbers = page_numbers(page.page, page.total_pages, window);
    PageDto {
        items: page.items,
        page: page.page,
        page_size: page.page_size,
        total: page.total,
        total_pages: page.total_pages,
        page_numbers: numbers,
    }
}
