//! 业务服务层

mod account_service;

pub use account_service::{AccountService, AuthenticatedUser};
