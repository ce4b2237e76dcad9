//! 数据模型
//!
//! - `request`: 发往积分服务的请求载荷（规范化语法）
//! - `response`: 积分服务的响应载荷与展示侧结果
//! - `state`: 提交状态机与图像资源句柄

pub mod request;
pub mod response;
pub mod state;

pub use request::{Bounds, CalculationRequest};
pub use response::{CalculationResult, IntegralResponse, NO_BOUNDS_SENTINEL};
pub use state::{GraphHandle, SubmissionPhase, SubmissionState};
