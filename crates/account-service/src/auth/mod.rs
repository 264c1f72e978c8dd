//! 认证模块
//!
//! 提供密码哈希、JWT Token 生成与验证，以及 Token 签发接口

mod jwt;
mod password;
mod traits;

pub use jwt::{Claims, JwtConfig, JwtManager};
pub use password::{SALT_LEN, generate_salt, hash_password, verify_password};
pub use traits::TokenIssuer;

#[cfg(test)]
pub use traits::MockTokenIssuer;
