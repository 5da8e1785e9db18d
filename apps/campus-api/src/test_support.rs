//! handler 测试共用的状态与请求构造

use crate::{AppState, ListingSettings, routes};
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
};
use campus_auth::{AuthService, JwtManager};
use campus_storage::{CampusStore, SimulatedLatency};
use domain::{Role, SessionContext};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const SECRET: &str = "test-secret";

fn jwt() -> JwtManager {
    JwtManager::new(SECRET.to_string(), 3600, 3600)
}

/// 装载演示数据、无延迟的应用状态
pub fn test_state() -> AppState {
    let store = CampusStore::with_fixtures(SimulatedLatency::none());
    let auth = Arc::new(AuthService::new(store.users(), jwt()));
    AppState {
        auth,
        store,
        listing: ListingSettings::default(),
    }
}

/// 演示账户对应角色的 access token
pub fn token_for(role: Role) -> String {
    let (user_id, email) = match role {
        Role::Admin => ("U001", "admin@campus.edu"),
        Role::Student => ("U002", "john.smith@campus.edu"),
        Role::Lecturer => ("U003", "sarah.johnson@campus.edu"),
        Role::Staff => ("U004", "staff@campus.edu"),
    };
    jwt()
        .issue_tokens(&SessionContext::new(user_id, email, role))
        .expect("token")
        .access_token
}

pub fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).expect("header"),
    );
    headers
}

/// 经完整路由发送请求，返回状态码与 JSON 响应体
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    role: Option<Role>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(role)));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("request");
    let response = routes::build_app(state.clone())
        .oneshot(request)
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}
