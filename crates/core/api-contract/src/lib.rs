//! 稳定的 DTO 与 API 响应契约。

use domain::{FeedItem, User};
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 登录请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// 过期时间（Unix 毫秒）
    pub expires: u64,
    pub user: User,
    pub permissions: Vec<String>,
}

/// 刷新 token 请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(alias = "refresh_token")]
    pub refresh_token: String,
}

/// 刷新 token 响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires: u64,
}

/// 列表查询参数：`?q=&page=&pageSize=`。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default, alias = "page_size")]
    pub page_size: Option<usize>,
}

/// 分页返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    /// 分页控件展示的页码
    pub page_numbers: Vec<usize>,
}

/// 附带实时在读人数的记录（课程、批次）。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithStudents<T> {
    #[serde(flatten)]
    pub record: T,
    pub students: usize,
}

/// 批量更新结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCountDto {
    pub updated: usize,
}

/// 计数器快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub store_reads: u64,
    pub store_writes: u64,
    pub not_found: u64,
    pub validation_failures: u64,
    pub login_success: u64,
    pub login_failure: u64,
}

/// 聚合通知流。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDto {
    pub items: Vec<FeedItem>,
    pub unread: usize,
}
