//! 用户管理 handlers
//!
//! - GET /users, /users/page, /users/{id} - 需要 USER.READ（admin/staff）
//! - POST /users, PUT /users/{id}, DELETE /users/{id} - 需要 USER.WRITE（admin）
//!
//! 创建时口令先做 argon2 哈希再写入存储；响应中不含口令。

use crate::AppState;
use crate::middleware::authorize;
use crate::utils::{
    created, internal_auth_error, json_body, list_query, ok, page_to_dto, storage_error,
};
use api_contract::ListQueryParams;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::HeaderMap,
    response::Response,
};
use campus_auth::hash_password;
use campus_listing::list_page;
use domain::{UserDraft, UserPatch, permissions};

pub async fn list_users(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::USER_READ) {
        return response;
    }
    match state.store.users().list_users().await {
        Ok(users) => ok(users),
        Err(err) => storage_error(err),
    }
}

pub async fn page_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQueryParams>,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::USER_READ) {
        return response;
    }
    let query = list_query(params, &state.listing);
    match state.store.users().list_users().await {
        Ok(users) => ok(page_to_dto(list_page(users, &query), state.listing.page_window)),
        Err(err) => storage_error(err),
    }
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::USER_READ) {
        return response;
    }
    match state.store.users().find_user(&id).await {
        Ok(user) => ok(user),
        Err(err) => storage_error(err),
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<UserDraft>, JsonRejection>,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::USER_WRITE) {
        return response;
    }
    let mut draft = match json_body(body) {
        Ok(draft) => draft,
        Err(response) => return response,
    };
    if !draft.password.is_empty() {
        draft.password = match hash_password(&draft.password) {
            Ok(hash) => hash,
            Err(err) => return internal_auth_error(err),
        };
    }
    match state.store.users().create_user(draft).await {
        Ok(user) => created(user),
        Err(err) => storage_error(err),
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::USER_WRITE) {
        return response;
    }
    let patch = match json_body(body) {
        Ok(patch) => patch,
        Err(response) => return response,
    };
    match state.store.users().update_user(&id, patch).await {
        Ok(user) => ok(user),
        Err(err) => storage_error(err),
    }
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::USER_WRITE) {
        return response;
    }
    match state.store.users().delete_user(&id).await {
        Ok(()) => ok(()),
        Err(err) => storage_error(err),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_state};
    use axum::http::StatusCode;
    use domain::Role;
    use serde_json::json;

    #[tokio::test]
    async fn user_listing_is_restricted() {
        let state = test_state();
        let (status, _) = send(&state, "GET", "/users", Some(Role::Student), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(&state, "GET", "/users/page?q=campus", Some(Role::Staff), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 4);
        assert!(body["data"]["items"][0].get("password").is_none());
    }

    #[tokio::test]
    async fn created_user_can_log_in() {
        let state = test_state();
        let draft = json!({
            "name": "Nina Park",
            "email": "nina.park@campus.edu",
            "password": "s3cret-pass",
            "role": "lecturer"
        });
        let (status, body) = send(&state, "POST", "/users", Some(Role::Admin), Some(draft)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], "U005");

        let (user, _) = state
            .auth
            .login("nina.park@campus.edu", "s3cret-pass")
            .await
            .expect("login");
        assert_eq!(user.id, "U005");
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let state = test_state();
        let draft = json!({
            "name": "Copy",
            "email": "STAFF@campus.edu",
            "password": "x",
            "role": "staff"
        });
        let (status, body) = send(&state, "POST", "/users", Some(Role::Admin), Some(draft)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "RESOURCE.CONFLICT");

        let draft = json!({
            "name": "Staffer",
            "email": "staffer@campus.edu",
            "password": "x",
            "role": "staff"
        });
        let (status, _) = send(&state, "POST", "/users", Some(Role::Staff), Some(draft)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
