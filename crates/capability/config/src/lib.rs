//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub jwt_secret: String,
    pub jwt_access_ttl_seconds: u64,
    pub jwt_refresh_ttl_seconds: u64,
    pub mock_latency_ms: u64,
    pub seed_fixtures: bool,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub page_window: usize,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置（测试可传入固定表）。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let source = Source { lookup: &lookup };
        let jwt_secret = source
            .optional("CAMPUS_JWT_SECRET")
            .ok_or_else(|| ConfigError::Missing("CAMPUS_JWT_SECRET".to_string()))?;
        let jwt_access_ttl_seconds =
            source.parse_with_default("CAMPUS_JWT_ACCESS_TTL_SECONDS", 3600_u64)?;
        let jwt_refresh_ttl_seconds =
            source.parse_with_default("CAMPUS_JWT_REFRESH_TTL_SECONDS", 604_800_u64)?;
        let http_addr = source
            .optional("CAMPUS_HTTP_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let mock_latency_ms = source.parse_with_default("CAMPUS_MOCK_LATENCY_MS", 300_u64)?;
        let seed_fixtures = source.bool_with_default("CAMPUS_SEED_FIXTURES", true);
        let default_page_size = source.parse_with_default("CAMPUS_DEFAULT_PAGE_SIZE", 10_usize)?;
        if default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "CAMPUS_DEFAULT_PAGE_SIZE".to_string(),
                "0".to_string(),
            ));
        }
        let max_page_size = source
            .parse_with_default("CAMPUS_MAX_PAGE_SIZE", 100_usize)?
            .max(default_page_size);
        let page_window = source.parse_with_default("CAMPUS_PAGE_WINDOW", 5_usize)?.max(1);

        Ok(Self {
            http_addr,
            jwt_secret,
            jwt_access_ttl_seconds,
            jwt_refresh_ttl_seconds,
            mock_latency_ms,
            seed_fixtures,
            default_page_size,
            max_page_size,
            page_window,
        })
    }
}

struct Source<'a, F: Fn(&str) -> Option<String>> {
    lookup: &'a F,
}

impl<F: Fn(&str) -> Option<String>> Source<'_, F> {
    /// 空串视为未设置。
    fn optional(&self, key: &str) -> Option<String> {
        match (self.lookup)(key) {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ => None,
        }
    }

    fn parse_with_default<T: std::str::FromStr>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, ConfigError> {
        let value = match self.optional(key) {
            Some(value) => value,
            None => return Ok(default),
        };
        value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(key.to_string(), value))
    }

    fn bool_with_default(&self, key: &str, default: bool) -> bool {
        match self.optional(key) {
            Some(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
            None => default,
        }
    }
}
