//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewUser, User};

/// 用户凭据仓储接口
///
/// 所有操作都以小写规范化后的用户名做精确匹配，存储侧同样只保存
/// 规范化形式，不存在大小写敏感的查找路径。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// 是否已存在该用户名的用户
    async fn exists(&self, username: &str) -> Result<bool>;

    /// 按用户名查找用户，无匹配时返回 None
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// 持久化新用户
    ///
    /// 用户名唯一性最终由存储层约束裁决：并发插入触发唯一约束冲突时
    /// 返回 `UsernameTaken`，存在性预检查只是快捷路径。
    async fn create(&self, user: &NewUser) -> Result<User>;
}
