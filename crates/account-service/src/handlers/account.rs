//! 账号相关的 HTTP 处理器
//!
//! 提供注册、登录和获取当前用户的 API

use axum::{
    Json,
    extract::{Request, State},
};
use validator::Validate;

use crate::auth::Claims;
use crate::dto::{
    AccountResponse, ApiResponse, CurrentUserResponse, LoginRequest, RegisterRequest,
};
use crate::error::{AccountError, Result};
use crate::state::AppState;

/// 注册新用户
///
/// POST /api/account/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>> {
    req.validate()?;

    let auth = state.accounts.register(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::success(AccountResponse::from(auth))))
}

/// 用户登录
///
/// POST /api/account/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>> {
    req.validate()?;

    let auth = state.accounts.login(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::success(AccountResponse::from(auth))))
}

/// 获取当前用户信息
///
/// GET /api/account/me
pub async fn me(request: Request) -> Result<Json<ApiResponse<CurrentUserResponse>>> {
    // 从请求扩展中获取 Claims（由认证中间件注入）
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| AccountError::Unauthorized("未认证".to_string()))?;

    Ok(Json(ApiResponse::success(CurrentUserResponse {
        user_id: claims.sub.clone(),
        username: claims.username.clone(),
        issued_at: claims.iat,
        expires_at: claims.exp,
    })))
}
