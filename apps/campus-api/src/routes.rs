//! 路由定义
//!
//! 集中管理所有 API 路由，同时挂载在 `/` 与 `/api` 两种前缀下：
//! - 健康检查与认证：/health, /login, /refresh-token, /logout, /me
//! - 实体 CRUD + 分页：/{entity}, /{entity}/page, /{entity}/{id}
//! - 关联查询与审批：/courses/{id}/subjects, /reservations/{id}/approve ...
//! - 通知流：/notifications/feed/*
//! - 指标：/metrics

use super::AppState;
use super::handlers::*;
use super::middleware::request_context;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use campus_listing::Searchable;
use campus_storage::{CampusStore, Collection, Record};
use domain::*;
use serde::{Serialize, de::DeserializeOwned};
use tower_http::trace::TraceLayer;

/// 组装完整应用：两种前缀、请求上下文与 HTTP 追踪
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_api_router())
        .nest("/api", create_api_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_context))
}

/// 通用 CRUD：列表、分页、详情、创建、更新、删除
fn record_routes<R>(router: Router<AppState>, path: &str) -> Router<AppState>
where
    R: Record + Serialize + Searchable,
    R::Draft: DeserializeOwned,
    R::Patch: DeserializeOwned,
    CampusStore: Collection<R>,
{
    router
        .route(path, get(list_records::<R>).post(create_record::<R>))
        .route(&format!("{path}/page"), get(page_records::<R>))
        .route(
            &format!("{path}/:id"),
            get(get_record::<R>)
                .put(update_record::<R>)
                .delete(delete_record::<R>),
        )
}

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    let router = Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/refresh-token", post(refresh_token))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route("/metrics", get(get_metrics));

    let router = record_routes::<Student>(router, "/students");
    let router = record_routes::<Lecturer>(router, "/lecturers");
    let router = record_routes::<Subject>(router, "/subjects");
    let router = record_routes::<Facility>(router, "/facilities");
    let router = record_routes::<Reservation>(router, "/reservations");
    let router = record_routes::<Resource>(router, "/resources");
    let router = record_routes::<Event>(router, "/events");
    let router = record_routes::<Message>(router, "/messages");
    let router = record_routes::<ScheduleEvent>(router, "/schedule-events");
    let router = record_routes::<ScheduleNotification>(router, "/schedule-notifications");
    let router = record_routes::<CollaborationGroup>(router, "/groups");
    let router = record_routes::<CollaborationMessage>(router, "/group-messages");
    let router = record_routes::<CollaborationFile>(router, "/group-files");
    let router = record_routes::<CollaborationTask>(router, "/group-tasks");

    router
        // 课程与批次附带在读人数
        .route("/courses", get(list_courses).post(create_record::<Course>))
        .route("/courses/page", get(page_courses))
        .route(
            "/courses/:id",
            get(get_course)
                .put(update_record::<Course>)
                .delete(delete_record::<Course>),
        )
        .route("/courses/:id/subjects", get(course_subjects))
        .route("/courses/:id/enrollments", get(course_enrollments))
        .route("/batches", get(list_batches).post(create_record::<Batch>))
        .route("/batches/page", get(page_batches))
        .route(
            "/batches/:id",
            get(get_batch)
                .put(update_record::<Batch>)
                .delete(delete_record::<Batch>),
        )
        .route("/batches/:id/enrollments", get(batch_enrollments))
        // 选课创建需要校验引用
        .route(
            "/enrollments",
            get(list_records::<Enrollment>).post(create_enrollment),
        )
        .route("/enrollments/page", get(page_records::<Enrollment>))
        .route(
            "/enrollments/:id",
            get(get_record::<Enrollment>)
                .put(update_record::<Enrollment>)
                .delete(delete_record::<Enrollment>),
        )
        .route("/students/:id/enrollments", get(student_enrollments))
        .route("/reservations/:id/approve", post(approve_reservation))
        .route("/reservations/:id/reject", post(reject_reservation))
        .route("/reservations/status/:status", get(reservations_by_status))
        .route("/messages/:id/read", post(mark_message_read))
        // 系统通知按收件人过滤读取
        .route(
            "/notifications",
            get(list_notifications).post(create_record::<Notification>),
        )
        .route("/notifications/page", get(page_notifications))
        .route(
            "/notifications/:id",
            get(get_notification)
                .put(update_record::<Notification>)
                .delete(delete_record::<Notification>),
        )
        .route("/notifications/feed", get(get_feed))
        .route("/notifications/feed/read-all", post(mark_feed_read_all))
        .route("/notifications/feed/:id/read", post(mark_feed_item_read))
        .route("/groups/:id/messages", get(group_messages))
        .route("/groups/:id/files", get(group_files))
        .route("/groups/:id/tasks", get(group_tasks))
        // 用户走独立的用户存储
        .route("/users", get(list_users).post(create_user))
        .route("/users/page", get(page_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}
