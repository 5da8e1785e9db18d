//! 输入校验辅助函数
//!
//! - normalize_required：去除首尾空格并检查非空
//! - json_body：请求体解析失败统一返回 400
//! - list_query：列表查询参数换算为 ListQuery，页大小受配置上限约束

use crate::ListingSettings;
use crate::utils::response::bad_request_error;
use api_contract::ListQueryParams;
use axum::{Json, extract::rejection::JsonRejection, response::Response};
use campus_listing::ListQuery;

/// 验证必填字段，去除空格并检查非空
pub fn normalize_required(value: String, field: &str) -> Result<String, Response> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(bad_request_error(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 解析 JSON 请求体
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "invalid request body");
            campus_telemetry::record_validation_failure();
            Err(bad_request_error(rejection.body_text()))
        }
    }
}

/// 列表查询参数：缺省页码 1、缺省页大小取配置，页大小限制在 `1..=max_page_size`
pub fn list_query(params: ListQueryParams, settings: &ListingSettings) -> ListQuery {
    let page_size = params
        .page_size
        .unwrap_or(settings.default_page_size)
        .clamp(1, settings.max_page_size.max(1));
    let q = params.q.filter(|value| !value.trim().is_empty());
    ListQuery::new(q, params.page.unwrap_or(1).max(1), page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_required_trims() {
        assert_eq!(
            normalize_required("  a@b.c ".to_string(), "email").expect("value"),
            "a@b.c"
        );
        assert!(normalize_required("   ".to_string(), "email").is_err());
    }

    #[test]
    fn list_query_applies_defaults_and_limits() {
        let settings = ListingSettings {
            default_page_size: 10,
            max_page_size: 50,
            page_window: 5,
        };
        let query = list_query(ListQueryParams::default(), &settings);
        assert_eq!((query.page, query.page_size), (1, 10));
        assert!(query.q.is_none());

        let params = ListQueryParams {
            q: Some("  ".to_string()),
            page: Some(0),
            page_size: Some(500),
        };
        let query = list_query(params, &settings);
        assert_eq!((query.page, query.page_size), (1, 50));
        assert!(query.q.is_none());
    }
}
