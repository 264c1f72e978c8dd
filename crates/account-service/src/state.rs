//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{JwtConfig, JwtManager};
use crate::repository::UserRepository;
use crate::service::AccountService;

/// Axum 应用共享状态
///
/// 包含数据库连接池、JWT 管理器和账号服务，通过 Clone 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL 连接池
    pub pool: PgPool,
    /// JWT 管理器（认证中间件验证 Token 使用）
    pub jwt_manager: JwtManager,
    /// 账号认证服务
    pub accounts: Arc<AccountService<UserRepository, JwtManager>>,
}

impl AppState {
    /// 创建新的应用状态
    ///
    /// 账号服务的凭据存储与 Token 签发器在此处显式构造并注入
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        let jwt_manager = JwtManager::new(jwt_config);
        let accounts = Arc::new(AccountService::new(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(jwt_manager.clone()),
        ));

        Self {
            pool,
            jwt_manager,
            accounts,
        }
    }
}
