//! 请求 DTO 定义

use serde::Deserialize;
use validator::Validate;

/// 注册请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 30, message = "用户名长度必须在 2-30 之间"))]
    pub username: String,
    #[validate(length(min = 4, max = 100, message = "密码长度必须在 4-100 之间"))]
    pub password: String,
}

/// 登录请求
///
/// 登录侧只做最小限制，具体的密码策略在注册时约束
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 30, message = "用户名长度必须在 1-30 之间"))]
    pub username: String,
    #[validate(length(min = 1, max = 100, message = "密码长度必须在 1-100 之间"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            username: "alice".to_string(),
            password: "hunter42".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short_username = RegisterRequest {
            username: "a".to_string(),
            password: "hunter42".to_string(),
        };
        assert!(short_username.validate().is_err());

        let short_password = RegisterRequest {
            username: "alice".to_string(),
            password: "abc".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_login_request_allows_short_password() {
        let req = LoginRequest {
            username: "alice".to_string(),
            password: "x".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
