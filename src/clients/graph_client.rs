/// 图像服务客户端
///
/// 封装对图像端点的 HTTP GET 调用，响应体当作不透明二进制消费
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::clients::GraphApi;
use crate::config::Config;
use crate::error::Result;

/// 图像服务客户端
pub struct GraphClient {
    http: Client,
    endpoint: String,
}

impl GraphClient {
    /// 创建新的图像服务客户端
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.graph_endpoint(),
        })
    }
}

#[async_trait]
impl GraphApi for GraphClient {
    async fn fetch_current(&self) -> Result<Vec<u8>> {
        let bytes = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        debug!("获取图像成功: {} 字节", bytes.len());

        Ok(bytes.to_vec())
    }
}
