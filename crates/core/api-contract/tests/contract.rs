use api_contract::{
    ListQueryParams, LoginResponse, PageDto, RefreshTokenRequest, RefreshTokenResponse,
    WithStudents,
};
use domain::{Role, User};
use serde_json::Value;

fn demo_user() -> User {
    User {
        id: "U001".to_string(),
        name: "Admin".to_string(),
        email: "admin@campus.edu".to_string(),
        role: Role::Admin,
        department: None,
        profile_image: None,
        last_login: None,
    }
}

#[test]
fn login_response_is_camel_case() {
    let response = LoginResponse {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires: 1_700_000_000_000,
        user: demo_user(),
        permissions: vec![],
    };
    let value = serde_json::to_value(response).expect("serialize");
    assert!(value.get("accessToken").is_some());
    assert!(value.get("refreshToken").is_some());
    assert!(value.get("access_token").is_none());
    assert_eq!(value["user"]["role"], "admin");
    assert!(value["user"].get("password").is_none());
    assert!(matches!(value.get("expires"), Some(Value::Number(_))));
}

#[test]
fn refresh_token_request_accepts_both_cases() {
    let req: RefreshTokenRequest =
        serde_json::from_str(r#"{"refreshToken":"token-1"}"#).expect("parse");
    assert_eq!(req.refresh_token, "token-1");
    let req: RefreshTokenRequest =
        serde_json::from_str(r#"{"refresh_token":"token-2"}"#).expect("parse");
    assert_eq!(req.refresh_token, "token-2");
}

#[test]
fn refresh_token_response_is_camel_case() {
    let response = RefreshTokenResponse {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        expires: 1,
    };
    let value = serde_json::to_value(response).expect("serialize");
    assert!(value.get("accessToken").is_some());
    assert!(value.get("refresh_token").is_none());
}

#[test]
fn list_query_params_parse_page_size() {
    let params: ListQueryParams =
        serde_json::from_str(r#"{"q":"smith","page":2,"pageSize":5}"#).expect("parse");
    assert_eq!(params.q.as_deref(), Some("smith"));
    assert_eq!(params.page, Some(2));
    assert_eq!(params.page_size, Some(5));
}

#[test]
fn page_dto_and_counts_serialize() {
    let page = PageDto {
        items: vec![WithStudents {
            record: serde_json::json!({ "id": "CRS001" }),
            students: 3,
        }],
        page: 1,
        page_size: 10,
        total: 1,
        total_pages: 1,
        page_numbers: vec![1],
    };
    let value = serde_json::to_value(page).expect("serialize");
    assert_eq!(value["totalPages"], 1);
    assert_eq!(value["pageNumbers"][0], 1);
    assert_eq!(value["items"][0]["id"], "CRS001");
    assert_eq!(value["items"][0]["students"], 3);
}
