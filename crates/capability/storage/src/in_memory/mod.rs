//! 内存存储实现模块
//!
//! 包含以下实现：
//! - RecordStore: InMemoryRecordStore（所有校园实体共用）
//! - UserStore: InMemoryUserStore
//! - SimulatedLatency: 模拟网络延迟

pub mod latency;
pub mod record;
pub mod user;

pub use latency::*;
pub use record::*;
pub use user::*;
