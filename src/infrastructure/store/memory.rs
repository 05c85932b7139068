//! 内存存储实现
//!
//! 模拟 `product` 表的行为：自增 id、按 id 排序、列约束检查。

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};
use tokio::sync::RwLock;
use validator::Validate;

use super::{ProductStore, StoreError, StoreResult};
use crate::app::product::model::Product;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    next_id: i32,
}

#[derive(Clone, Default)]
pub struct MemoryProductStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行与数据库列定义等价的约束，并按 `NUMERIC(7,2)` 规则舍入价格
    fn check_row(product: &Product) -> StoreResult<Product> {
        product
            .validate()
            .map_err(|e| StoreError::ConstraintViolation(e.to_string()))?;

        let mut row = product.clone();
        if let Some(price) = row.price {
            let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            // NUMERIC(7,2) 的上界（不含）
            if rounded.abs() >= Decimal::new(100_000, 0) {
                return Err(StoreError::ConstraintViolation(format!(
                    "price {} overflows NUMERIC(7,2)",
                    price
                )));
            }
            row.price = Some(rounded);
        }
        Ok(row)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> StoreResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, product: &Product) -> StoreResult<Product> {
        let mut row = Self::check_row(product)?;

        let mut table = self.table.write().await;
        table.next_id += 1;
        row.id = table.next_id;
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, product: &Product) -> StoreResult<bool> {
        let row = Self::check_row(product)?;

        let mut table = self.table.write().await;
        match table.rows.get_mut(&row.id) {
            Some(existing) => {
                *existing = row;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
