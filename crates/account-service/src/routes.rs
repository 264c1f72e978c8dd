//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// 构建账号相关的路由
///
/// 注册与登录为公开路由，/me 需要携带 Bearer Token
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/register", post(handlers::account::register))
        .route("/account/login", post(handlers::account::login))
        .route("/account/me", get(handlers::account::me))
}

/// 构建全部 API 路由
pub fn api_routes() -> Router<AppState> {
    account_routes()
}
