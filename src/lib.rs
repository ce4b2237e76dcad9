//! # Integral Submit
//!
//! 远程积分计算服务的客户端前端：把用户书写的数学表达式规范化成
//! 服务端语法，依次调用积分计算和图像两个远程端点，再把结果还原成
//! 用户友好的展示语法。
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有 HTTP 连接资源，只暴露能力
//! - `IntegralClient` / `GraphClient` - 两个远程端点的唯一入口
//!
//! ### ② 能力层（Normalizer）
//! - `normalizer` - 纯文本双向转换，无状态、无 I/O、永不报错
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - 校验输入、串联两次远程调用、独占管理提交状态
//! - `SubmissionOrchestrator` - 状态机的唯一迁移入口
//!
//! ### ④ 展示层（App）
//! - `app` - 交互循环，只读状态、只触发 `submit` / `clear`
//!
//! ## 数据流
//!
//! ```text
//! 用户输入 → normalize → IntegralApi → denormalize → SubmissionState → 展示
//!                              ↓ 成功后
//!                          GraphApi → GraphHandle
//! ```

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::{GraphApi, GraphClient, IntegralApi, IntegralClient};
pub use config::Config;
pub use error::{Result, SubmitError};
pub use models::{
    Bounds, CalculationRequest, CalculationResult, GraphHandle, IntegralResponse,
    SubmissionPhase, SubmissionState, NO_BOUNDS_SENTINEL,
};
pub use normalizer::{denormalize, normalize};
pub use orchestrator::SubmissionOrchestrator;
