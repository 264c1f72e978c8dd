//! 共享库
//!
//! 包含账号服务使用的配置加载、数据库连接、日志初始化等基础设施代码。

pub mod config;
pub mod database;
pub mod observability;
