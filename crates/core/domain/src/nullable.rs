//! 可清空字段的补丁反序列化。
//!
//! 配合 `#[serde(default, deserialize_with = "crate::nullable::deserialize")]` 使用：
//! 字段缺省为 `None`（不修改），`null` 为 `Some(None)`（清空），有值为 `Some(Some(v))`。

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
