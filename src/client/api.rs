//! 产品目录 HTTP 客户端

use reqwest::{Response, StatusCode};
use tracing::debug;
use url::Url;

use super::{ClientConfig, ClientError, Result};
use crate::app::product::model::Product;

const PRODUCT_PATH: &str = "api/product";

/// 产品接口客户端，每个方法对应一次 HTTP 调用，不做重试
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    fn collection_url(&self) -> Result<Url> {
        Ok(self.base_url.join(PRODUCT_PATH)?)
    }

    fn item_url(&self, id: i32) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/{}", PRODUCT_PATH, id))?)
    }

    /// 获取全部产品
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        let response = self.http.get(self.collection_url()?).send().await?;
        let products = ensure_success(response).await?.json().await?;
        Ok(products)
    }

    /// 按 id 查询；服务端返回空结果时得到 `None`
    pub async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        let response = self.http.post(self.item_url(id)?).send().await?;
        let body = ensure_success(response).await?.text().await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// 创建产品，返回带有服务端分配 id 的产品
    pub async fn create_product(&self, product: &Product) -> Result<Product> {
        let response = self
            .http
            .post(self.collection_url()?)
            .json(product)
            .send()
            .await?;
        let created: Product = ensure_success(response).await?.json().await?;
        debug!("Created product {}", created.id);
        Ok(created)
    }

    /// 整行更新
    pub async fn update_product(&self, product: &Product) -> Result<()> {
        let response = self
            .http
            .put(self.collection_url()?)
            .json(product)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// 删除产品；返回 `false` 表示服务端报告不存在
    pub async fn delete_product(&self, id: i32) -> Result<bool> {
        let response = self.http.delete(self.item_url(id)?).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        ensure_success(response).await?;
        Ok(true)
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
