//! 账号服务入口
//!
//! 提供用户注册、登录与 Bearer Token 认证的 REST API。

use axum::{
    Json, Router,
    extract::Request,
    http::HeaderValue,
    middleware,
    middleware::Next,
    response::Response,
    routing::get,
};
use account_service::{auth::JwtConfig, middleware::auth_middleware, routes, state::AppState};
use account_shared::{config::AppConfig, database::Database, observability};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：从 config/{service_name}.toml 加载
    let config = AppConfig::load("account-service").unwrap_or_default();

    observability::init(&config.log)?;

    info!("Starting account-service on {}", config.server_addr());

    // 初始化数据库并执行迁移
    let db = Database::connect(&config.database).await?;
    sqlx::migrate!("./migrations").run(db.pool()).await?;
    info!("Database migrations applied");

    // JWT 密钥配置：生产环境必须通过环境变量注入，开发环境使用默认值
    let jwt_secret = std::env::var("ACCOUNT_JWT_SECRET").unwrap_or_else(|_| {
        if config.is_production() {
            panic!("ACCOUNT_JWT_SECRET must be set in production environment");
        }
        warn!("Using default JWT secret - set ACCOUNT_JWT_SECRET for production");
        JwtConfig::default().secret
    });

    let jwt_expires = std::env::var("ACCOUNT_JWT_EXPIRES_SECS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(86400);

    let jwt_config = JwtConfig {
        secret: jwt_secret,
        expires_in_secs: jwt_expires,
        issuer: "account-service".to_string(),
    };

    let state = AppState::new(db.pool().clone(), jwt_config);

    // CORS 配置：通过 ACCOUNT_CORS_ORIGINS 环境变量控制允许的来源
    // 默认允许本地开发地址，生产环境应设置为实际域名
    let allowed_origins = std::env::var("ACCOUNT_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    let cors = if allowed_origins == "*" {
        if config.is_production() {
            warn!("ACCOUNT_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        info!("CORS allowed_origins: * (all origins)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        info!("CORS allowed_origins: {}", allowed_origins);
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .nest("/api", routes::api_routes())
        .route("/health", get(health_check))
        .route(
            "/ready",
            get({
                let db_for_ready = db;
                move || readiness_check(db_for_ready.clone())
            }),
        )
        // HTTP 安全头：即使反向代理未配置也确保基本安全策略生效
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        // 认证中间件：验证 JWT Token
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时，
    // 停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 为所有响应注入 HTTP 安全头
async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    // 禁止浏览器猜测 Content-Type
    headers.insert("x-content-type-options", "nosniff".parse().unwrap());
    // 禁止页面被嵌入 iframe
    headers.insert("x-frame-options", "DENY".parse().unwrap());
    // 强制浏览器后续访问只使用 HTTPS
    headers.insert(
        "strict-transport-security",
        "max-age=31536000; includeSubDomains".parse().unwrap(),
    );
    response
}

/// 监听关闭信号
///
/// K8s 通过 SIGTERM 通知 Pod 停止；本地开发通过 Ctrl+C。
/// 收到任一信号后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "account-service"
    }))
}

/// 就绪探针：检查数据库连接是否可用
async fn readiness_check(db: Database) -> Json<serde_json::Value> {
    let db_ok = db.health_check().await.is_ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": "account-service",
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
