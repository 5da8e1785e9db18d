//! 教务 handlers：课程、批次（附在读人数）、选课与关联查询
//!
//! - GET /courses, /courses/page, /courses/{id} - 附 `students`
//! - GET /batches, /batches/page, /batches/{id} - 附 `students`
//! - POST /enrollments - 校验引用并补齐冗余名称
//! - GET /courses/{id}/subjects, /courses/{id}/enrollments
//! - GET /batches/{id}/enrollments, /students/{id}/enrollments

use crate::AppState;
use crate::middleware::authorize;
use crate::utils::{created, json_body, list_query, ok, page_to_dto, storage_error};
use api_contract::{ListQueryParams, WithStudents};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::HeaderMap,
    response::Response,
};
use campus_listing::list_page;
use domain::{EnrollmentDraft, permissions};

fn with_students<T>((record, students): (T, usize)) -> WithStudents<T> {
    WithStudents { record, students }
}

pub async fn list_courses(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.courses_with_counts().await {
        Ok(items) => ok(items.into_iter().map(with_students).collect::<Vec<_>>()),
        Err(err) => storage_error(err),
    }
}

pub async fn page_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQueryParams>,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    let query = list_query(params, &state.listing);
    match state.store.courses_with_counts().await {
        Ok(items) => {
            let page = list_page(items, &query).map(with_students);
            ok(page_to_dto(page, state.listing.page_window))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    let course = match state.store.records::<domain::Course>().find(&id).await {
        Ok(course) => course,
        Err(err) => return storage_error(err),
    };
    match state.store.course_student_count(&id).await {
        Ok(students) => ok(WithStudents { record: course, students }),
        Err(err) => storage_error(err),
    }
}

pub async fn list_batches(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.batches_with_counts().await {
        Ok(items) => ok(items.into_iter().map(with_students).collect::<Vec<_>>()),
        Err(err) => storage_error(err),
    }
}

pub async fn page_batches(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQueryParams>,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    let query = list_query(params, &state.listing);
    match state.store.batches_with_counts().await {
        Ok(items) => {
            let page = list_page(items, &query).map(with_students);
            ok(page_to_dto(page, state.listing.page_window))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    let batch = match state.store.records::<domain::Batch>().find(&id).await {
        Ok(batch) => batch,
        Err(err) => return storage_error(err),
    };
    match state.store.batch_student_count(&id).await {
        Ok(students) => ok(WithStudents { record: batch, students }),
        Err(err) => storage_error(err),
    }
}

/// 创建选课：学生、课程、批次必须存在
pub async fn create_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<EnrollmentDraft>, JsonRejection>,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_WRITE) {
        return response;
    }
    let draft = match json_body(body) {
        Ok(draft) => draft,
        Err(response) => return response,
    };
    match state.store.enroll(draft).await {
        Ok(enrollment) => created(enrollment),
        Err(err) => storage_error(err),
    }
}

pub async fn course_subjects(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.subjects_by_course(&id).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

pub async fn course_enrollments(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.enrollments_by_course(&id).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

pub async fn batch_enrollments(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.enrollments_by_batch(&id).await {
        Ok(items) => ok(items),
        Err(err) => storage_error(err),
    }
}

pub async fn student_enrollments(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::CAMPUS_READ) {
        return response;
    }
    match state.store.enrollments_by_student(&id).await {
        Ok(items) => ok(items),
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
    async fn courses_carry_student_counts() {
        let state = test_state();
        let (status, body) = send(&state, "GET", "/courses", Some(Role::Lecturer), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["id"], "CRS001");
        assert_eq!(body["data"][0]["students"], 2);
        assert_eq!(body["data"][2]["students"], 0);

        let (_, body) = send(&state, "GET", "/batches/BAT001", Some(Role::Lecturer), None).await;
        assert_eq!(body["data"]["name"], "CS 2024");
        assert_eq!(body["data"]["students"], 2);
    }

    #[tokio::test]
    async fn course_page_searches_the_record() {
        let state = test_state();
        let (status, body) = send(
            &state,
            "GET",
            "/courses/page?q=linear",
            Some(Role::Student),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["id"], "CRS002");
        assert_eq!(body["data"]["items"][0]["students"], 2);
    }

    #[tokio::test]
    async fn enrollment_raises_course_count() {
        let state = test_state();
        let draft = json!({
            "studentId": "ST002",
            "courseId": "CRS003",
            "batchId": "BAT002",
            "enrollmentDate": "2024-09-01"
        });
        let (status, body) =
            send(&state, "POST", "/enrollments", Some(Role::Staff), Some(draft)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["courseName"], "Quantum Mechanics");

        let (_, body) = send(&state, "GET", "/courses/CRS003", Some(Role::Staff), None).await;
        assert_eq!(body["data"]["students"], 1);
    }

    #[tokio::test]
    async fn enrollment_with_unknown_student_is_rejected() {
        let state = test_state();
        let draft = json!({
            "studentId": "ST999",
            "courseId": "CRS001",
            "batchId": "BAT001",
            "enrollmentDate": "2024-09-01"
        });
        let (status, body) =
            send(&state, "POST", "/enrollments", Some(Role::Admin), Some(draft)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID.REQUEST");
    }

    #[tokio::test]
    async fn relation_lookups() {
        let state = test_state();
        let (_, body) =
            send(&state, "GET", "/courses/CRS001/subjects", Some(Role::Student), None).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

        let (_, body) =
            send(&state, "GET", "/students/ST001/enrollments", Some(Role::Student), None).await;
        assert_eq!(body["data"][0]["id"], "ENR001");

        let (status, _) =
            send(&state, "GET", "/batches/BAT404/enrollments", Some(Role::Student), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
