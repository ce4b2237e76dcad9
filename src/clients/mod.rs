//! 远程服务客户端 - 基础设施层
//!
//! 持有 HTTP 连接资源，只向上暴露两个能力：
//! - `IntegralApi`: 提交计算请求，取回文字结果
//! - `GraphApi`: 取回服务端最近一次计算对应的图像
//!
//! 编排层只依赖 trait，不依赖具体客户端，测试时用内存假实现替换。

pub mod graph_client;
pub mod integral_client;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CalculationRequest, IntegralResponse};

/// 积分服务能力
#[async_trait]
pub trait IntegralApi: Send + Sync {
    /// 提交一次积分计算
    async fn calculate(&self, request: &CalculationRequest) -> Result<IntegralResponse>;
}

/// 图像服务能力
#[async_trait]
pub trait GraphApi: Send + Sync {
    /// 获取服务端当前图像
    ///
    /// 无参数：图像对应服务端最近一次成功计算的状态。
    async fn fetch_current(&self) -> Result<Vec<u8>>;
}

pub use graph_client::GraphClient;
pub use integral_client::IntegralClient;
