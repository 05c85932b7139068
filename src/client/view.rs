//! 产品列表视图与编辑表单
//!
//! 视图不在本地修补状态：每次新增、编辑、删除之后都重新拉取整个列表。

use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use rust_decimal::Decimal;
use tracing::info;

use super::{CatalogClient, Result};
use crate::app::product::model::Product;

/// 新增和编辑共用的表单
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    product: Product,
}

impl ProductForm {
    /// 新增：绑定一个空产品
    pub fn new() -> Self {
        Self {
            product: Product::default(),
        }
    }

    /// 编辑：用选中的产品预先填充
    pub fn edit(product: &Product) -> Self {
        Self {
            product: product.clone(),
        }
    }

    pub fn set_product_name(&mut self, name: Option<String>) -> &mut Self {
        self.product.product_name = name;
        self
    }

    pub fn set_product_code(&mut self, code: Option<String>) -> &mut Self {
        self.product.product_code = code;
        self
    }

    pub fn set_price(&mut self, price: Option<Decimal>) -> &mut Self {
        self.product.price = price;
        self
    }

    /// 确认表单，取出绑定的产品
    pub fn into_product(self) -> Product {
        self.product
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

/// 产品列表视图
pub struct ProductListView {
    client: CatalogClient,
    products: Vec<Product>,
    selected: Option<i32>,
}

impl ProductListView {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            selected: None,
        }
    }

    /// 视图激活：加载完整列表
    pub async fn activate(&mut self) -> Result<&[Product]> {
        self.refresh().await?;
        Ok(self.products.as_slice())
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.products = self.client.get_products().await?;
        // 选中项在重新加载后可能已不存在
        if let Some(id) = self.selected {
            if !self.products.iter().any(|p| p.id == id) {
                self.selected = None;
            }
        }
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 在当前列表中选中一项
    pub fn select(&mut self, id: i32) -> Option<&Product> {
        let product = self.products.iter().find(|p| p.id == id)?;
        self.selected = Some(id);
        Some(product)
    }

    pub fn selected(&self) -> Option<&Product> {
        let id = self.selected?;
        self.products.iter().find(|p| p.id == id)
    }

    /// 为选中项打开编辑表单
    pub fn edit_selected(&self) -> Option<ProductForm> {
        self.selected().map(ProductForm::edit)
    }

    /// 确认新增表单：调用 Create，然后重新加载列表
    pub async fn add(&mut self, form: ProductForm) -> Result<Product> {
        let created = self.client.create_product(&form.into_product()).await?;
        info!("Product {} created", created.id);

        self.refresh().await?;
        Ok(created)
    }

    /// 确认编辑表单：调用 Update，然后重新加载列表
    pub async fn edit(&mut self, form: ProductForm) -> Result<()> {
        let product = form.into_product();
        self.client.update_product(&product).await?;
        info!("Product {} updated", product.id);

        self.refresh().await
    }

    /// 删除后重新加载列表；返回 `false` 表示服务端报告不存在
    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let deleted = self.client.delete_product(id).await?;
        if deleted {
            info!("Product {} deleted", id);
        }

        self.refresh().await?;
        Ok(deleted)
    }

    pub fn render(&self) -> Table {
        render_products(&self.products)
    }
}

/// 以表格形式渲染产品列表
pub fn render_products(products: &[Product]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(
        ["Id", "Product Name", "Product Code", "Price"]
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Green)),
    );

    for product in products {
        table.add_row(vec![
            product.id.to_string(),
            display_or_null(product.product_name.as_deref()),
            display_or_null(product.product_code.as_deref()),
            product
                .price
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "NULL".to_string()),
        ]);
    }

    table
}

fn display_or_null(value: Option<&str>) -> String {
    value.unwrap_or("NULL").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: 3,
            product_name: Some("Widget".to_string()),
            product_code: Some("W1".to_string()),
            price: Some(Decimal::new(999, 2)),
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        assert_eq!(ProductForm::new().into_product(), Product::default());
    }

    #[test]
    fn test_edit_form_is_prepopulated() {
        assert_eq!(ProductForm::edit(&widget()).into_product(), widget());

        let mut form = ProductForm::edit(&widget());
        form.set_price(Some(Decimal::new(1250, 2)));

        let product = form.into_product();
        assert_eq!(product.id, 3);
        assert_eq!(product.product_name.as_deref(), Some("Widget"));
        assert_eq!(product.product_code.as_deref(), Some("W1"));
        assert_eq!(product.price, Some(Decimal::new(1250, 2)));
    }

    #[test]
    fn test_render_products() {
        let mut empty = widget();
        empty.id = 4;
        empty.product_name = None;
        empty.product_code = None;
        empty.price = None;

        let rendered = render_products(&[widget(), empty]).to_string();
        assert!(rendered.contains("Widget"));
        assert!(rendered.contains("9.99"));
        assert!(rendered.contains("NULL"));
        assert!(rendered.contains("Product Code"));
    }
}
