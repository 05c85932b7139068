//! 客户端配置

use url::Url;

use super::Result;

/// 未配置时使用的服务地址
pub const DEFAULT_API_URL: &str = "http://localhost:5015/";

/// 覆盖服务地址的环境变量
pub const API_URL_ENV: &str = "CATALOG_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: Url,
}

impl ClientConfig {
    /// 解析服务地址：显式传入的值优先，否则使用默认地址
    ///
    /// 地址只在启动时解析一次；路径统一以 `/` 结尾，
    /// 保证 `Url::join` 拼接相对路径时不会丢掉最后一段。
    pub fn resolve(api_url: Option<&str>) -> Result<Self> {
        let raw = api_url.unwrap_or(DEFAULT_API_URL).trim();
        let mut api_url = Url::parse(raw)?;

        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        Ok(Self { api_url })
    }
}
