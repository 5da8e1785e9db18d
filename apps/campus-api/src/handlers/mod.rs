//! Handlers 模块

pub mod academics;
pub mod auth;
pub mod campus;
pub mod metrics;
pub mod notifications;
pub mod records;
pub mod users;

pub use academics::*;
pub use auth::*;
pub use campus::*;
pub use metrics::*;
pub use notifications::*;
pub use records::*;
pub use users::*;
