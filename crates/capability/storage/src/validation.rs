//! 验证辅助函数
//!
//! 写入前的字段校验，失败统一返回 `StorageError::Validation`：
//! - ensure_required：去除首尾空格后非空
//! - ensure_email：形如 `local@domain`
//! - ensure_range：数值区间
//! - ensure_order：起止先后

use crate::error::StorageError;

/// 验证必填字段
pub fn ensure_required(value: &str, field: &str) -> Result<(), StorageError> {
    if value.trim().is_empty() {
        return Err(StorageError::validation(format!("{field} required")));
    }
    Ok(())
}

/// 验证邮箱格式
pub fn ensure_email(value: &str, field: &str) -> Result<(), StorageError> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(StorageError::validation(format!("{field} must be an email address")));
    }
    Ok(())
}

/// 可选邮箱：空串视为未填写
pub fn ensure_optional_email(value: &str, field: &str) -> Result<(), StorageError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    ensure_email(value, field)
}

/// 验证数值区间（闭区间）
pub fn ensure_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), StorageError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(StorageError::validation(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// 验证起止顺序（允许相等）
pub fn ensure_order<T: PartialOrd>(
    start: &T,
    end: &T,
    start_field: &str,
    end_field: &str,
) -> Result<(), StorageError> {
    if end < start {
        return Err(StorageError::validation(format!(
            "{end_field} must not be before {start_field}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_both_parts() {
        assert!(ensure_email("a@b.edu", "email").is_ok());
        assert!(ensure_email("@b.edu", "email").is_err());
        assert!(ensure_email("ab.edu", "email").is_err());
        assert!(ensure_email("a@b@c", "email").is_err());
        assert!(ensure_optional_email("", "email").is_ok());
    }

    #[test]
    fn range_is_inclusive() {
        assert!(ensure_range(4.0, 0.0, 4.0, "gpa").is_ok());
        let err = ensure_range(4.5, 0.0, 4.0, "gpa").expect_err("out of range");
        assert_eq!(err.to_string(), "validation failed: gpa must be between 0 and 4");
    }

    #[test]
    fn required_rejects_whitespace() {
        assert!(ensure_required("  ", "name").is_err());
        assert!(ensure_required(" x ", "name").is_ok());
    }
}
