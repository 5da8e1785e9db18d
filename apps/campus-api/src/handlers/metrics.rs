//! 计数器快照
//!
//! - GET /metrics（SYSTEM.METRICS.READ，仅 admin）

use api_contract::MetricsSnapshotDto;
use axum::{extract::State, http::HeaderMap, response::Response};
use campus_telemetry::metrics;
use domain::permissions;

use crate::{AppState, middleware::authorize, utils::ok};

pub async fn get_metrics(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers, permissions::SYSTEM_METRICS_READ) {
        return response;
    }

    let snapshot = metrics().snapshot();
    ok(MetricsSnapshotDto {
        store_reads: snapshot.store_reads,
        store_writes: snapshot.store_writes,
        not_found: snapshot.not_found,
        validation_failures: snapshot.validation_failures,
        login_success: snapshot.login_success,
        login_failure: snapshot.login_failure,
    })
}
