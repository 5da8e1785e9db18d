//! 校园管理 HTTP API：登录/刷新、各实体 CRUD 与分页、通知流、指标快照。

mod handlers;
mod middleware;
mod routes;
mod utils;

#[cfg(test)]
mod test_support;

use campus_auth::{AuthService, JwtManager};
use campus_config::AppConfig;
use campus_storage::{CampusStore, SimulatedLatency};
use campus_telemetry::init_tracing;
use std::sync::Arc;

/// 列表分页参数（来自配置）
#[derive(Debug, Clone, Copy)]
pub struct ListingSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub page_window: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            page_window: 5,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub store: CampusStore,
    pub listing: ListingSettings,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 内存数据：每个请求都先等待模拟延迟
    let latency = SimulatedLatency::from_millis(config.mock_latency_ms);
    let store = if config.seed_fixtures {
        CampusStore::with_fixtures(latency)
    } else {
        CampusStore::new(latency)
    };
    let jwt = JwtManager::new(
        config.jwt_secret.clone(),
        config.jwt_access_ttl_seconds,
        config.jwt_refresh_ttl_seconds,
    );
    let auth = Arc::new(AuthService::new(store.users(), jwt));
    let state = AppState {
        auth,
        store,
        listing: ListingSettings {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
            page_window: config.page_window,
        },
    };

    let app = routes::build_app(state);
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(
        addr = %config.http_addr,
        seed_fixtures = config.seed_fixtures,
        latency_ms = config.mock_latency_ms,
        "campus api listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
