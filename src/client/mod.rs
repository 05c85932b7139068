//! 产品目录客户端
//!
//! - `api`：对服务接口的一一映射
//! - `config`：运行时解析的服务地址
//! - `view`：列表视图与编辑表单，每次修改后整表重新加载

pub mod api;
pub mod config;
pub mod view;

pub use api::CatalogClient;
pub use config::ClientConfig;
pub use view::{ProductForm, ProductListView};

/// 客户端错误类型
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid API url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
