//! 权限码与角色默认授权。

use crate::Role;

pub const CAMPUS_READ: &str = "CAMPUS.READ";
pub const CAMPUS_WRITE: &str = "CAMPUS.WRITE";
pub const USER_READ: &str = "USER.READ";
pub const USER_WRITE: &str = "USER.WRITE";
pub const SYSTEM_METRICS_READ: &str = "SYSTEM.METRICS.READ";

/// 全部权限码。
pub const PERMISSION_CODES: &[&str] = &[
    CAMPUS_READ,
    CAMPUS_WRITE,
    USER_READ,
    USER_WRITE,
    SYSTEM_METRICS_READ,
];

/// 角色 → 权限码。
///
/// admin 拥有全部权限；staff 可维护校园数据与查看用户；
/// lecturer/student 只读。
pub fn codes_for_role(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => PERMISSION_CODES,
        Role::Staff => &[CAMPUS_READ, CAMPUS_WRITE, USER_READ],
        Role::Lecturer | Role::Student => &[CAMPUS_READ],
    }
}
