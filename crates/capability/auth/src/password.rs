//! 账户口令
//!
//! 演示账户以明文种子口令启动，经用户接口创建的账户保存 argon2 PHC 串。
//! 明文账户首次登录成功时给出新的哈希，由 `AuthService` 写回用户存储，
//! 之后该账户只走哈希校验。

use crate::AuthError;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand_core::OsRng;
use subtle::ConstantTimeEq;

/// 口令比对结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordVerdict {
    Mismatch,
    Match,
    /// 种子明文匹配，附带应写回存储的哈希
    MatchNeedsRehash(String),
}

impl PasswordVerdict {
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::Mismatch)
    }

    pub fn into_rehash(self) -> Option<String> {
        match self {
            Self::MatchNeedsRehash(hash) => Some(hash),
            Self::Mismatch | Self::Match => None,
        }
    }
}

/// 存储中的口令形态
enum StoredCredential<'a> {
    Argon2(PasswordHash<'a>),
    Seeded(&'a str),
}

impl<'a> StoredCredential<'a> {
    fn parse(stored: &'a str) -> Self {
        match PasswordHash::new(stored) {
            Ok(hash) if hash.algorithm.as_str().starts_with("argon2") => Self::Argon2(hash),
            _ => Self::Seeded(stored),
        }
    }
}

/// 为新账户或改密生成 argon2 哈希。
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AuthError::Internal(format!("password hashing failed: {err}")))?;
    Ok(hash.to_string())
}

/// 存储值是否已是 argon2 哈希
pub fn is_hashed(stored: &str) -> bool {
    matches!(StoredCredential::parse(stored), StoredCredential::Argon2(_))
}

/// 比对登录口令与存储值。空口令永不匹配。
pub fn check_password(stored: &str, candidate: &str) -> Result<PasswordVerdict, AuthError> {
    if candidate.is_empty() {
        return Ok(PasswordVerdict::Mismatch);
    }
    match StoredCredential::parse(stored) {
        StoredCredential::Argon2(hash) => {
            match Argon2::default().verify_password(candidate.as_bytes(), &hash) {
                Ok(()) => Ok(PasswordVerdict::Match),
                Err(argon2::password_hash::Error::Password) => Ok(PasswordVerdict::Mismatch),
                Err(err) => Err(AuthError::Internal(format!(
                    "password verification failed: {err}"
                ))),
            }
        }
        StoredCredential::Seeded(seed) => {
            if bool::from(seed.as_bytes().ct_eq(candidate.as_bytes())) {
                Ok(PasswordVerdict::MatchNeedsRehash(hash_password(candidate)?))
            } else {
                Ok(PasswordVerdict::Mismatch)
            }
        }
    }
}
