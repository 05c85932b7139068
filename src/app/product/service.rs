//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info};

use super::model::Product;
use crate::core::error::CoreError;
use crate::infrastructure::store::ProductStore;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.store.list().await?;
        debug!("Listed {} products", products.len());
        Ok(products)
    }

    pub async fn get_product(&self, id: i32) -> Result<Option<Product>, CoreError> {
        let product = self.store.get(id).await?;
        debug!("Lookup product {}: found={}", id, product.is_some());
        Ok(product)
    }

    /// 创建产品；请求中的 id 被忽略，由存储分配
    pub async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        let created = self.store.insert(&product).await?;
        info!("Created product {} ({:?})", created.id, created.product_code);
        Ok(created)
    }

    /// 整行替换，id 不存在时返回 NotFound
    pub async fn update_product(&self, product: Product) -> Result<(), CoreError> {
        if !self.store.update(&product).await? {
            return Err(CoreError::NotFound(format!("产品 {} 不存在", product.id)));
        }
        info!("Updated product {}", product.id);
        Ok(())
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), CoreError> {
        if !self.store.delete(id).await? {
            return Err(CoreError::NotFound(format!("产品 {} 不存在", id)));
        }
        info!("Deleted product {}", id);
        Ok(())
    }

    pub async fn check_store(&self) -> Result<(), CoreError> {
        self.store.ping().await?;
        Ok(())
    }
}
