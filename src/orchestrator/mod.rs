//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次提交的完整生命周期，是整个系统的"指挥中心"。
//!
//! ## 流程
//!
//! ```text
//! 校验输入（上下限成对、表达式非空）
//!     ↓
//! normalizer::normalize（用户语法 → 服务语法）
//!     ↓
//! IntegralApi::calculate（HTTP POST）
//!     ↓
//! normalizer::denormalize（逐字段还原，哨兵原样保留）
//!     ↓
//! GraphApi::fetch_current（HTTP GET，前一步成功才发起）
//!     ↓
//! SubmissionState（展示层只读）
//! ```
//!
//! ## 设计原则
//!
//! 1. **状态独占**：只有编排层能修改 SubmissionState 和图像句柄
//! 2. **向下依赖**：编排层 → clients（trait）→ HTTP
//! 3. **提交编号**：每次通过校验的提交获得递增编号，过期提交的完成
//!    结果被直接丢弃，后发起的提交胜出
//! 4. **无业务判断**：表达式在数学上是否合法由远程服务判定

pub mod submission;

pub use submission::SubmissionOrchestrator;
