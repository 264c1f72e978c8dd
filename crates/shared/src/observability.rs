//! 日志初始化模块
//!
//! 基于 tracing / tracing-subscriber 提供统一的日志订阅器配置，
//! 支持 EnvFilter 级别过滤和 json / pretty 两种输出格式。

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogConfig;

/// 初始化全局日志订阅器
///
/// 过滤级别优先取 RUST_LOG 环境变量，其次取配置文件中的 log.level。
/// 重复初始化（如测试场景）会返回错误，由调用方决定是否忽略。
pub fn init(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = if config.format == "json" {
        fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer().with_target(true).with_ansi(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_accepts_default_config() {
        // 全局订阅器只能设置一次，这里只验证初始化不会 panic
        let _ = init(&LogConfig::default());
    }
}
