//! 中间件与鉴权辅助

pub mod auth;

pub use auth::*;
