//! 账号服务
//!
//! 提供用户注册、登录和 Bearer Token 签发的 REST API。
//!
//! ## 核心功能
//!
//! - **注册**：用户名唯一性检查、每用户随机盐、带密钥哈希、持久化、签发 Token
//! - **登录**：按规范化用户名查找、常数时间摘要比对、签发 Token
//! - **认证**：Bearer Token 中间件保护后续请求
//!
//! ## 模块结构
//!
//! - `auth`: 密码哈希、JWT 生成与验证、Token 签发接口
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `middleware`: 认证中间件
//! - `models`: 实体模型
//! - `repository`: 凭据存储
//! - `routes`: 路由配置
//! - `service`: 注册 / 登录业务编排
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 持久化：sqlx / PostgreSQL
//! - 数据验证：validator
//! - 序列化：serde (camelCase)

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

// 重新导出核心类型
pub use auth::{Claims, JwtConfig, JwtManager, TokenIssuer};
pub use dto::{AccountResponse, ApiResponse, LoginRequest, RegisterRequest};
pub use error::{AccountError, Result};
pub use models::{NewUser, User};
pub use repository::{UserRepository, UserRepositoryTrait};
pub use service::{AccountService, AuthenticatedUser};
