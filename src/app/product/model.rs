//! 产品数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 产品实体，对应 `product` 表的一行
///
/// `id` 由存储层在插入时分配；创建请求中携带的 `id` 会被忽略。
/// 长度约束只由存储层执行，服务层不做预校验。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: i32,

    #[validate(length(max = 100, message = "product_name exceeds VARCHAR(100)"))]
    pub product_name: Option<String>,

    #[validate(length(max = 10, message = "product_code exceeds VARCHAR(10)"))]
    pub product_code: Option<String>,

    pub price: Option<Decimal>,
}

impl Product {
    pub fn new(
        product_name: Option<String>,
        product_code: Option<String>,
        price: Option<Decimal>,
    ) -> Self {
        Self {
            id: 0,
            product_name,
            product_code,
            price,
        }
    }
}
