//! # 产品目录
//!
//! 单表 `product` 的 CRUD 服务及其客户端：
//! - `app`：产品资源的模型、服务、处理器和路由
//! - `core`：统一错误处理、请求日志中间件
//! - `infrastructure`：数据库连接池、日志、存储实现
//! - `client`：HTTP 客户端与列表视图

pub mod app;
pub mod client;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::product::model::Product;
