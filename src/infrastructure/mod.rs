//! 基础设施层：数据库、日志、存储

pub mod database;
pub mod logger;
pub mod store;
