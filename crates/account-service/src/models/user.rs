//! 用户实体
//!
//! 用户名在创建时统一转为小写存储，密码以"盐 + 带密钥哈希"的形式保存，
//! 两者均为二进制列，不存在可还原的明文。

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// 已注册用户
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    /// 小写规范化后的用户名，全表唯一
    pub username: String,
    /// HMAC-SHA-512 摘要，固定 64 字节
    pub password_hash: Vec<u8>,
    /// 每用户独立的随机密钥材料，注册时生成且不再变更
    pub password_salt: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// 待持久化的新用户
///
/// id 与 created_at 由数据库生成
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: Vec<u8>,
    pub password_salt: Vec<u8>,
}
