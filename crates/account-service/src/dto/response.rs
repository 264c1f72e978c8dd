//! 响应 DTO 定义

use serde::Serialize;

use crate::service::AuthenticatedUser;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }

    /// 创建成功响应（无数据）
    pub fn success_empty() -> ApiResponse<()> {
        ApiResponse {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: None,
        }
    }
}

/// 注册 / 登录成功响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// 小写规范化后的用户名
    pub username: String,
    /// Bearer Token
    pub token: String,
    /// Token 过期时间戳（秒）
    pub expires_at: i64,
}

impl From<AuthenticatedUser> for AccountResponse {
    fn from(auth: AuthenticatedUser) -> Self {
        Self {
            username: auth.username,
            token: auth.token,
            expires_at: auth.expires_at,
        }
    }
}

/// 当前用户响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user_id: String,
    pub username: String,
    pub issued_at: i64,
    pub expires_at: i64,
}
