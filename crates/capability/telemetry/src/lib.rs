//! 追踪、请求 ID 生成与进程内计数指标。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub store_reads: u64,
    pub store_writes: u64,
    pub not_found: u64,
    pub validation_failures: u64,
    pub login_success: u64,
    pub login_failure: u64,
}

/// 进程内计数器。
pub struct TelemetryMetrics {
    store_reads: AtomicU64,
    store_writes: AtomicU64,
    not_found: AtomicU64,
    validation_failures: AtomicU64,
    login_success: AtomicU64,
    login_failure: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            store_reads: AtomicU64::new(0),
            store_writes: AtomicU64::new(0),
            not_found: AtomicU64::new(0),
            validation_failures: AtomicU64::new(0),
            login_success: AtomicU64::new(0),
            login_failure: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            store_reads: self.store_reads.load(Ordering::Relaxed),
            store_writes: self.store_writes.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            login_success: self.login_success.load(Ordering::Relaxed),
            login_failure: self.login_failure.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录存储读取次数（list/find）。
pub fn record_store_read() {
    metrics().store_reads.fetch_add(1, Ordering::Relaxed);
}

/// 记录存储写入次数（create/update/delete 成功）。
pub fn record_store_write() {
    metrics().store_writes.fetch_add(1, Ordering::Relaxed);
}

/// 记录查询不到记录的次数。
pub fn record_not_found() {
    metrics().not_found.fetch_add(1, Ordering::Relaxed);
}

/// 记录写入校验失败次数。
pub fn record_validation_failure() {
    metrics()
        .validation_failures
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录登录成功次数。
pub fn record_login_success() {
    metrics().login_success.fetch_add(1, Ordering::Relaxed);
}

/// 记录登录失败次数（账户不存在或口令错误）。
pub fn record_login_failure() {
    metrics().login_failure.fetch_add(1, Ordering::Relaxed);
}
