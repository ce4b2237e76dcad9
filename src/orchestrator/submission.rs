//! 提交编排器
//!
//! 状态机的所有迁移都集中在本文件的 `prepare` / `apply_*` / `clear` 中，
//! 异步的 `submit` 只负责在两次远程调用之间串联这些迁移。

use tracing::{debug, error, info, warn};

use crate::clients::{GraphApi, IntegralApi};
use crate::error::SubmitError;
use crate::models::{
    CalculationRequest, CalculationResult, GraphHandle, IntegralResponse, SubmissionPhase,
    SubmissionState, NO_BOUNDS_SENTINEL,
};
use crate::normalizer;
use crate::utils::logging::truncate_text;

/// 提交编排器
///
/// 独占持有提交状态和当前图像句柄；展示层通过 [`state`](Self::state)
/// 只读访问，通过 `submit` / `clear` 和编辑操作触发变更。
pub struct SubmissionOrchestrator<I, G> {
    integral: I,
    graph: G,
    state: SubmissionState,
    /// 最近一次通过校验的提交编号，0 表示尚未提交过
    seq: u64,
}

impl<I: IntegralApi, G: GraphApi> SubmissionOrchestrator<I, G> {
    /// 创建新的提交编排器
    pub fn new(integral: I, graph: G) -> Self {
        Self {
            integral,
            graph,
            state: SubmissionState::default(),
            seq: 0,
        }
    }

    /// 只读访问当前提交状态
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    // ========== 编辑操作 ==========

    /// 更新表达式输入
    pub fn set_expression(&mut self, text: &str) {
        self.state.expression = text.to_string();
        self.leave_invalid();
    }

    /// 更新下限输入
    pub fn set_lower_limit(&mut self, text: &str) {
        self.state.lower_limit = text.to_string();
        self.leave_invalid();
    }

    /// 更新上限输入
    pub fn set_upper_limit(&mut self, text: &str) {
        self.state.upper_limit = text.to_string();
        self.leave_invalid();
    }

    /// 任意编辑使 Invalid 回到 Idle
    fn leave_invalid(&mut self) {
        if self.state.phase == SubmissionPhase::Invalid {
            self.state.phase = SubmissionPhase::Idle;
            self.state.error = None;
        }
    }

    // ========== 提交流程 ==========

    /// 执行一次完整提交
    ///
    /// 校验失败不发起任何网络调用；积分调用失败不再发起图像调用。
    /// 重新提交失败时，上一次成功的结果保留在状态中不被清空。
    ///
    /// # 参数
    /// - `raw`: 用户原始表达式
    /// - `lower`: 下限原始输入，可为空
    /// - `upper`: 上限原始输入，可为空
    pub async fn submit(&mut self, raw: &str, lower: &str, upper: &str) {
        let Some((id, request)) = self.prepare(raw, lower, upper) else {
            return;
        };

        let response = match self.integral.calculate(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!("❌ 积分计算失败: {}", e);
                self.apply_failure(id, &e);
                return;
            }
        };
        if !self.apply_integral_response(id, response) {
            return;
        }

        match self.graph.fetch_current().await {
            Ok(bytes) => {
                self.apply_graph(id, bytes);
            }
            Err(e) => {
                error!("❌ 获取图像失败: {}", e);
                self.apply_failure(id, &e);
            }
        }
    }

    /// 校验输入并构建请求
    ///
    /// # 返回
    /// 校验通过返回本次提交的编号和请求载荷；
    /// 校验失败进入 Invalid 并返回 None，保证不触碰网络。
    pub fn prepare(
        &mut self,
        raw: &str,
        lower: &str,
        upper: &str,
    ) -> Option<(u64, CalculationRequest)> {
        self.state.expression = raw.to_string();
        self.state.lower_limit = lower.to_string();
        self.state.upper_limit = upper.to_string();

        let has_lower = !lower.trim().is_empty();
        let has_upper = !upper.trim().is_empty();

        // 上下限成对检查先于表达式检查
        if has_lower != has_upper {
            self.reject(SubmitError::IncompleteBounds);
            return None;
        }
        if raw.trim().is_empty() {
            self.reject(SubmitError::EmptyExpression);
            return None;
        }

        self.state.error = None;
        self.state.phase = SubmissionPhase::Submitting;
        self.seq += 1;

        let canonical = normalizer::normalize(raw);
        info!(
            "📤 提交 #{}: {} → {}",
            self.seq,
            truncate_text(raw, 60),
            truncate_text(&canonical, 60)
        );

        let request = if has_lower {
            // 无法解析的边界按 NaN 序列化为 null，交给服务端判定
            let lower = lower.trim().parse::<f64>().unwrap_or(f64::NAN);
            let upper = upper.trim().parse::<f64>().unwrap_or(f64::NAN);
            CalculationRequest::definite(canonical, lower, upper)
        } else {
            CalculationRequest::indefinite(canonical)
        };

        Some((self.seq, request))
    }

    /// 应用积分调用的成功结果
    ///
    /// 逐字段还原为展示语法；`defined_integral` 等于哨兵字符串时原样保留；
    /// 步骤顺序即服务端返回顺序。
    pub fn apply_integral_response(&mut self, id: u64, response: IntegralResponse) -> bool {
        if !self.is_current(id) {
            return false;
        }

        let defined = if response.defined_integral == NO_BOUNDS_SENTINEL {
            response.defined_integral
        } else {
            normalizer::denormalize(&response.defined_integral)
        };

        self.state.result = CalculationResult {
            indefinite: normalizer::denormalize(&response.indefinite_integral),
            defined,
            steps: response
                .explanation
                .iter()
                .map(|step| normalizer::denormalize(step))
                .collect(),
        };
        self.state.phase = SubmissionPhase::AwaitingGraph;
        true
    }

    /// 应用图像调用的成功结果
    ///
    /// 旧图像句柄在替换时释放。
    pub fn apply_graph(&mut self, id: u64, bytes: Vec<u8>) -> bool {
        if !self.is_current(id) {
            return false;
        }

        if let Some(old) = self.state.graph.take() {
            debug!("释放旧图像资源: {} 字节", old.len());
        }
        self.state.graph = Some(GraphHandle::new(bytes));
        self.state.phase = SubmissionPhase::Ready;
        info!("✅ 提交 #{} 完成", id);
        true
    }

    /// 应用任一远程调用的失败
    pub fn apply_failure(&mut self, id: u64, err: &SubmitError) -> bool {
        if !self.is_current(id) {
            return false;
        }

        self.state.error = Some(err.user_message().to_string());
        self.state.phase = SubmissionPhase::Failed;
        true
    }

    /// 清空输入、结果、图像与错误，回到初始状态
    ///
    /// 幂等操作。
    pub fn clear(&mut self) {
        self.state.reset();
        info!("🧹 已清空输入与结果");
    }

    fn is_current(&self, id: u64) -> bool {
        if id != self.seq {
            debug!("忽略过期提交 #{} 的完成结果（当前 #{}）", id, self.seq);
            return false;
        }
        true
    }

    fn reject(&mut self, err: SubmitError) {
        warn!("校验未通过: {}", err);
        self.state.error = Some(err.user_message().to_string());
        self.state.phase = SubmissionPhase::Invalid;
    }
}
