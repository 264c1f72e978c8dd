//! 密码处理
//!
//! 使用 HMAC-SHA-512 计算密码摘要：以每用户独立的随机盐作为密钥，
//! 对密码的 UTF-8 字节做带密钥哈希。相同密码在不同用户下因盐不同而
//! 产生不同摘要。

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha512;

use crate::error::{AccountError, Result};

type HmacSha512 = Hmac<Sha512>;

/// 盐长度（字节），与 HMAC-SHA-512 输出等长
pub const SALT_LEN: usize = 64;

/// 生成一份新的随机盐
///
/// 随机源为加密安全的 CSPRNG，每次注册调用一次，之后不再重新生成。
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// 计算密码摘要
pub fn hash_password(salt: &[u8], password: &str) -> Result<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(salt)
        .map_err(|e| AccountError::Internal(format!("密码哈希失败: {}", e)))?;
    mac.update(password.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// 验证密码
///
/// 用存储的盐重新计算摘要并与存储值比较。比较由 `Mac::verify_slice`
/// 完成：常数时间、覆盖整个摘要，长度不一致直接判定不匹配，不会越界
/// 索引也不会提前返回。
pub fn verify_password(salt: &[u8], password: &str, stored_hash: &[u8]) -> Result<bool> {
    let mut mac = HmacSha512::new_from_slice(salt)
        .map_err(|e| AccountError::Internal(format!("密码验证失败: {}", e)))?;
    mac.update(password.as_bytes());
    Ok(mac.verify_slice(stored_hash).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let salt = generate_salt();
        let hashed = hash_password(&salt, "test_password_123").unwrap();

        assert_eq!(hashed.len(), 64);
        assert!(verify_password(&salt, "test_password_123", &hashed).unwrap());
        assert!(!verify_password(&salt, "wrong_password", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_different_salt_different_hash() {
        let salt_a = generate_salt();
        let salt_b = generate_salt();
        assert_ne!(salt_a.to_vec(), salt_b.to_vec());

        let hash_a = hash_password(&salt_a, "shared_password").unwrap();
        let hash_b = hash_password(&salt_b, "shared_password").unwrap();
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn test_verify_rejects_truncated_hash() {
        // 摘要长度不一致时判定为不匹配，而不是 panic 或越界
        let salt = generate_salt();
        let hashed = hash_password(&salt, "secret").unwrap();

        assert!(!verify_password(&salt, "secret", &hashed[..32]).unwrap());
        assert!(!verify_password(&salt, "secret", &[]).unwrap());
    }

    #[test]
    fn test_empty_password_is_hashable() {
        // 核心层不限制密码内容，空密码同样可哈希、可验证
        let salt = generate_salt();
        let hashed = hash_password(&salt, "").unwrap();
        assert!(verify_password(&salt, "", &hashed).unwrap());
        assert!(!verify_password(&salt, "non-empty", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_salt_fails_verification() {
        let salt = generate_salt();
        let other_salt = generate_salt();
        let hashed = hash_password(&salt, "secret").unwrap();
        assert!(!verify_password(&other_salt, "secret", &hashed).unwrap());
    }
}
