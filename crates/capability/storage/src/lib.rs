//! # Campus Storage 模块
//!
//! 校园管理后台的数据访问层：所有实体集合都在内存中，按插入顺序保存，
//! 每次调用前等待一段模拟延迟，进程重启后修改丢失。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：`Record`、`RecordStore<R>`、`UserStore`
//! 2. **数据模型层** (`models.rs`)：用户账户与各实体的 `Record` 实现
//! 3. **错误处理层** (`error.rs`)：统一的 `StorageError`，不存在只有一种信号
//! 4. **验证辅助层** (`validation.rs`)：必填、邮箱、数值区间、起止顺序
//! 5. **实现层** (`in_memory/`)：`InMemoryRecordStore<R>`、`InMemoryUserStore`
//! 6. **容器层** (`campus.rs`、`feed.rs`)：`CampusStore` 持有全部集合，
//!    提供跨集合查询（选课、在读人数、预约审批、通知流）
//! 7. **种子数据** (`fixtures.rs`)
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use campus_storage::{CampusStore, RecordStore, SimulatedLatency};
//! use domain::{Student, StudentDraft};
//!
//! let store = CampusStore::with_fixtures(SimulatedLatency::none());
//! let students = store.records::<Student>().list().await?;
//! let created = store
//!     .records::<Student>()
//!     .create(StudentDraft {
//!         name: "Jane Doe".to_string(),
//!         department: "Arts".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## 并发
//!
//! 每个集合由 `std::sync::RwLock` 保护，延迟在取锁之前等待，锁不跨越 `.await`，
//! 因此单个集合上的操作彼此原子；跨集合操作（选课引用检查）先读后写，不保证整体原子。

pub mod campus;
pub mod error;
pub mod feed;
pub mod fixtures;
pub mod in_memory;
pub mod models;
pub mod traits;
pub mod validation;

pub use campus::*;
pub use error::*;
pub use feed::{merge_feed, unread_count, visible_to};
pub use models::*;
pub use traits::*;
pub use validation::*;

pub use in_memory::{InMemoryRecordStore, InMemoryUserStore, SimulatedLatency};
