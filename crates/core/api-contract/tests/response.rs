use api_contract::{ApiResponse, FeedDto, ListQueryParams, PageDto, UpdatedCountDto};
use domain::FeedItem;
use serde_json::json;

#[test]
fn page_envelope_uses_camel_case_keys() {
    let page = PageDto {
        items: vec!["CRS001", "CRS002"],
        page: 2,
        page_size: 2,
        total: 5,
        total_pages: 3,
        page_numbers: vec![1, 2, 3],
    };
    let value = serde_json::to_value(ApiResponse::success(page)).expect("serialize");
    assert_eq!(value["success"], true);
    assert!(value["error"].is_null());
    assert_eq!(value["data"]["pageSize"], 2);
    assert_eq!(value["data"]["totalPages"], 3);
    assert_eq!(value["data"]["pageNumbers"], json!([1, 2, 3]));
    assert_eq!(value["data"]["items"], json!(["CRS001", "CRS002"]));
}

#[test]
fn feed_envelope_carries_unread_count() {
    let item: FeedItem = serde_json::from_value(json!({
        "id": "SNT001",
        "source": "schedule",
        "title": "Lecture moved",
        "message": "Room B204",
        "createdAt": "2024-10-07T09:00:00Z",
        "read": false
    }))
    .expect("feed item");
    let value = serde_json::to_value(ApiResponse::success(FeedDto {
        items: vec![item],
        unread: 1,
    }))
    .expect("serialize");
    assert_eq!(value["data"]["unread"], 1);
    assert_eq!(value["data"]["items"][0]["source"], "schedule");
    assert_eq!(value["data"]["items"][0]["createdAt"], "2024-10-07T09:00:00Z");
}

#[test]
fn error_envelope_has_no_data() {
    let value = serde_json::to_value(ApiResponse::<UpdatedCountDto>::error(
        "RESOURCE.NOT_FOUND",
        "notification 'NTF404' not found",
    ))
    .expect("serialize");
    assert_eq!(value["success"], false);
    assert!(value["data"].is_null());
    assert_eq!(value["error"]["code"], "RESOURCE.NOT_FOUND");
}

#[test]
fn list_query_accepts_both_page_size_spellings() {
    let camel: ListQueryParams =
        serde_json::from_value(json!({ "q": "lab", "pageSize": 25 })).expect("camel");
    assert_eq!(camel.page_size, Some(25));
    assert_eq!(camel.q.as_deref(), Some("lab"));

    let snake: ListQueryParams =
        serde_json::from_value(json!({ "page": 3, "page_size": 5 })).expect("snake");
    assert_eq!(snake.page, Some(3));
    assert_eq!(snake.page_size, Some(5));
}
