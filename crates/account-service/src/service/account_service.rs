//! 账号认证服务
//!
//! 处理注册与登录的核心业务逻辑，包括：
//! - 用户名小写规范化与唯一性检查
//! - 每用户随机盐生成与带密钥哈希计算
//! - 登录时的常数时间摘要比对
//! - 认证成功后的 Token 签发
//!
//! ## 注册流程
//!
//! 1. 规范化用户名 -> 2. 存在性预检查 -> 3. 生成盐并计算摘要
//!    -> 4. 持久化（唯一约束兜底并发冲突） -> 5. 签发 Token
//!
//! ## 登录流程
//!
//! 1. 规范化用户名并查找 -> 2. 用存储盐重算摘要 -> 3. 常数时间比对
//!    -> 4. 签发 Token
//!
//! 用户不存在与密码错误统一映射为 `InvalidCredentials`，两条失败路径
//! 对调用方不可区分。

use std::sync::Arc;

use tracing::{info, instrument};

use crate::auth::{self, TokenIssuer};
use crate::error::{AccountError, Result};
use crate::models::NewUser;
use crate::repository::UserRepositoryTrait;

/// 认证结果
///
/// 注册或登录成功后返回给调用方的用户名（规范化后）与 Bearer Token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub token: String,
    pub expires_at: i64,
}

/// 账号认证服务
///
/// 凭据存储与 Token 签发器均由构造方注入，服务本身不持有除此之外的
/// 任何共享状态，单次请求之间相互独立。
pub struct AccountService<R, T>
where
    R: UserRepositoryTrait,
    T: TokenIssuer,
{
    users: Arc<R>,
    tokens: Arc<T>,
}

impl<R, T> AccountService<R, T>
where
    R: UserRepositoryTrait,
    T: TokenIssuer,
{
    pub fn new(users: Arc<R>, tokens: Arc<T>) -> Self {
        Self { users, tokens }
    }

    /// 注册新用户
    ///
    /// 存在性预检查只是给调用方的快捷失败路径；并发场景下同名注册的
    /// 最终裁决由存储层唯一约束完成，冲突同样以 `UsernameTaken` 返回。
    /// 失败时不留下任何部分写入。
    #[instrument(skip_all, fields(username = %username))]
    pub async fn register(&self, username: &str, password: &str) -> Result<AuthenticatedUser> {
        let username = username.to_lowercase();

        if self.users.exists(&username).await? {
            return Err(AccountError::UsernameTaken);
        }

        let salt = auth::generate_salt();
        let password_hash = auth::hash_password(&salt, password)?;

        let user = self
            .users
            .create(&NewUser {
                username,
                password_hash,
                password_salt: salt.to_vec(),
            })
            .await?;

        info!(user_id = user.id, "user registered");

        let (token, expires_at) = self.tokens.create_token(&user)?;
        Ok(AuthenticatedUser {
            username: user.username,
            token,
            expires_at,
        })
    }

    /// 验证用户凭据并签发 Token
    #[instrument(skip_all, fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthenticatedUser> {
        let username = username.to_lowercase();

        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !auth::verify_password(&user.password_salt, password, &user.password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        let (token, expires_at) = self.tokens.create_token(&user)?;
        Ok(AuthenticatedUser {
            username: user.username,
            token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use crate::auth::MockTokenIssuer;
    use crate::models::User;
    use crate::repository::MockUserRepositoryTrait;

    /// 内存版凭据存储，行为与 PostgreSQL 仓储一致（含唯一约束）
    struct InMemoryUserRepo {
        users: Mutex<HashMap<String, User>>,
        next_id: AtomicI64,
    }

    impl InMemoryUserRepo {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }

        fn stored_hash(&self, username: &str) -> Vec<u8> {
            self.users.lock().unwrap()[username].password_hash.clone()
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepo {
        async fn exists(&self, username: &str) -> Result<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .contains_key(&username.to_lowercase()))
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .get(&username.to_lowercase())
                .cloned())
        }

        async fn create(&self, user: &NewUser) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let key = user.username.to_lowercase();
            // 唯一约束
            if users.contains_key(&key) {
                return Err(AccountError::UsernameTaken);
            }
            let created = User {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                username: key.clone(),
                password_hash: user.password_hash.clone(),
                password_salt: user.password_salt.clone(),
                created_at: Utc::now(),
            };
            users.insert(key, created.clone());
            Ok(created)
        }
    }

    /// 固定格式的 Token 签发器
    struct FakeTokenIssuer;

    impl TokenIssuer for FakeTokenIssuer {
        fn create_token(&self, user: &User) -> Result<(String, i64)> {
            Ok((format!("token-{}", user.username), 4_102_444_800))
        }
    }

    fn service_with_memory_repo()
    -> (Arc<InMemoryUserRepo>, AccountService<InMemoryUserRepo, FakeTokenIssuer>) {
        let repo = Arc::new(InMemoryUserRepo::new());
        let service = AccountService::new(repo.clone(), Arc::new(FakeTokenIssuer));
        (repo, service)
    }

    #[tokio::test]
    async fn test_register_then_duplicate_register_is_rejected() {
        let (_repo, service) = service_with_memory_repo();

        service.register("bob", "pass-1").await.unwrap();
        let second = service.register("bob", "pass-2").await;
        assert!(matches!(second, Err(AccountError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_register_then_login_succeeds() {
        let (_repo, service) = service_with_memory_repo();

        let registered = service.register("bob", "hunter42").await.unwrap();
        let logged_in = service.login("bob", "hunter42").await.unwrap();

        assert_eq!(registered.username, "bob");
        assert_eq!(logged_in.username, "bob");
        assert_eq!(logged_in.token, "token-bob");
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_fails() {
        let (_repo, service) = service_with_memory_repo();

        service.register("bob", "correct").await.unwrap();
        let result = service.login("bob", "incorrect").await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_username_is_case_insensitive() {
        let (_repo, service) = service_with_memory_repo();

        let registered = service.register("Alice", "secret").await.unwrap();
        // 注册返回的用户名已规范化
        assert_eq!(registered.username, "alice");

        let logged_in = service.login("alice", "secret").await.unwrap();
        assert_eq!(logged_in.username, "alice");

        // 混合大小写的重复注册同样被拒绝
        let dup = service.register("ALICE", "other").await;
        assert!(matches!(dup, Err(AccountError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_login_unknown_user_fails_like_wrong_password() {
        let (_repo, service) = service_with_memory_repo();

        service.register("bob", "correct").await.unwrap();

        let unknown = service.login("nonexistent", "anything").await.unwrap_err();
        let wrong = service.login("bob", "incorrect").await.unwrap_err();

        // 两种失败路径对调用方不可区分
        assert!(matches!(unknown, AccountError::InvalidCredentials));
        assert!(matches!(wrong, AccountError::InvalidCredentials));
        assert_eq!(unknown.error_code(), wrong.error_code());
    }

    #[tokio::test]
    async fn test_same_password_produces_different_hashes_per_user() {
        let (repo, service) = service_with_memory_repo();

        service.register("bob", "shared_password").await.unwrap();
        service.register("carol", "shared_password").await.unwrap();

        assert_ne!(repo.stored_hash("bob"), repo.stored_hash("carol"));
    }

    #[tokio::test]
    async fn test_concurrent_registration_race_maps_to_username_taken() {
        // 模拟竞态：预检查未发现同名用户，但插入时命中存储层唯一约束
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_create()
            .returning(|_| Err(AccountError::UsernameTaken));

        let service = AccountService::new(Arc::new(repo), Arc::new(FakeTokenIssuer));
        let result = service.register("bob", "pass").await;
        assert!(matches!(result, Err(AccountError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_taken_username_skips_persistence() {
        // 预检查命中时不应触发 create
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_exists().returning(|_| Ok(true));
        repo.expect_create().times(0);

        let service = AccountService::new(Arc::new(repo), Arc::new(FakeTokenIssuer));
        let result = service.register("bob", "pass").await;
        assert!(matches!(result, Err(AccountError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_username()
            .returning(|_| Err(AccountError::Database(sqlx::Error::PoolClosed)));

        let service = AccountService::new(Arc::new(repo), Arc::new(FakeTokenIssuer));
        let result = service.login("bob", "pass").await;
        assert!(matches!(result, Err(AccountError::Database(_))));
    }

    #[tokio::test]
    async fn test_token_issuer_failure_propagates() {
        let repo = Arc::new(InMemoryUserRepo::new());
        let mut tokens = MockTokenIssuer::new();
        tokens
            .expect_create_token()
            .returning(|_| Err(AccountError::Internal("签发失败".to_string())));

        let service = AccountService::new(repo, Arc::new(tokens));
        let result = service.register("bob", "pass").await;
        assert!(matches!(result, Err(AccountError::Internal(_))));
    }
}
