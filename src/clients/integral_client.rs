/// 积分服务客户端
///
/// 封装对积分计算端点的 HTTP POST 调用
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::clients::IntegralApi;
use crate::config::Config;
use crate::error::Result;
use crate::models::{CalculationRequest, IntegralResponse};

/// 积分服务客户端
pub struct IntegralClient {
    http: Client,
    endpoint: String,
}

impl IntegralClient {
    /// 创建新的积分服务客户端
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.calculate_endpoint(),
        })
    }
}

#[async_trait]
impl IntegralApi for IntegralClient {
    /// 提交计算请求
    ///
    /// # 参数
    /// - `request`: 规范化之后的计算请求
    ///
    /// # 返回
    /// 返回服务端语法的计算结果；非 2xx 状态码或响应体解码失败都算请求失败
    async fn calculate(&self, request: &CalculationRequest) -> Result<IntegralResponse> {
        debug!("计算请求 Payload: {}", serde_json::to_string(request).unwrap_or_default());

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<IntegralResponse>()
            .await?;

        debug!("计算结果: indefinite={}", response.indefinite_integral);

        Ok(response)
    }
}
