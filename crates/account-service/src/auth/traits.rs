//! Token 签发接口定义
//!
//! 认证服务只依赖该抽象签发令牌，便于替换实现和 mock 测试

use crate::error::Result;
use crate::models::User;

/// Token 签发器接口
///
/// 对给定用户签发一枚不透明的 Bearer Token，同时返回过期时间戳（秒）。
/// 签发只依赖用户身份与外部提供的签发配置。
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn create_token(&self, user: &User) -> Result<(String, i64)>;
}
