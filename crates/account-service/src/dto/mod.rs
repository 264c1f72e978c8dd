//! 请求与响应 DTO 模块

pub mod request;
pub mod response;

pub use request::{LoginRequest, RegisterRequest};
pub use response::{AccountResponse, ApiResponse, CurrentUserResponse};
