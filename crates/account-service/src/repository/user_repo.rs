//! 用户凭据仓储
//!
//! 提供用户记录的存在性检查、按用户名查找和创建

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::UserRepositoryTrait;
use crate::error::{AccountError, Result};
use crate::models::{NewUser, User};

/// 基于 PostgreSQL 的用户凭据仓储
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 用户名规范化：统一小写后再参与任何查询或写入
    fn normalize(username: &str) -> String {
        username.to_lowercase()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn exists(&self, username: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(Self::normalize(username))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, password_salt, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(Self::normalize(username))
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: &NewUser) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, password_salt)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, password_salt, created_at
            "#,
        )
        .bind(Self::normalize(&user.username))
        .bind(&user.password_hash)
        .bind(&user.password_salt)
        .fetch_one(&self.pool)
        .await;

        match created {
            Ok(created) => Ok(created),
            // 并发注册同名用户时，唯一约束冲突等价于用户名已占用
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AccountError::UsernameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
