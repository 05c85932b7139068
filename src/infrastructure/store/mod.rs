//! 产品存储层
//!
//! `ProductStore` 是服务层与存储之间的接缝：生产环境使用
//! [`PgProductStore`]，测试和本地调试使用 [`MemoryProductStore`]。
//! 两者执行相同的列约束（长度、`NUMERIC(7,2)` 精度）。

mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;

use crate::app::product::model::Product;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// 产品存储接口
///
/// 每个方法对应一条单行 SQL 语句，不做跨调用的事务组合。
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 按存储顺序（id 升序）返回所有行
    async fn list(&self) -> StoreResult<Vec<Product>>;

    async fn get(&self, id: i32) -> StoreResult<Option<Product>>;

    /// 插入新行，忽略 `product.id`，返回带有分配 id 的行
    async fn insert(&self, product: &Product) -> StoreResult<Product>;

    /// 整行替换；返回受影响的行数是否为 1
    async fn update(&self, product: &Product) -> StoreResult<bool>;

    /// 删除；返回是否确实删除了一行
    async fn delete(&self, id: i32) -> StoreResult<bool>;

    /// 存储连通性检查
    async fn ping(&self) -> StoreResult<()>;
}
