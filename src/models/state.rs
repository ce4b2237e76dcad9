use crate::models::response::CalculationResult;

/// 当前展示的图像资源句柄
///
/// 持有图像的二进制数据本体；被替换或清空时随所有权一起释放，
/// 不会跨多次提交累积。
#[derive(Debug, Clone, PartialEq)]
pub struct GraphHandle {
    bytes: Vec<u8>,
}

impl GraphHandle {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 提交状态机的阶段
///
/// ```text
/// Idle ──提交(输入非法)──> Invalid ──任意编辑──> Idle
/// Idle ──提交(输入合法)──> Submitting
/// Submitting ──积分调用失败──> Failed
/// Submitting ──积分调用成功──> AwaitingGraph
/// AwaitingGraph ──图像调用失败──> Failed（文字结果保留，无图像）
/// AwaitingGraph ──图像调用成功──> Ready
/// Failed / Invalid / Ready ──clear()──> Idle
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Invalid,
    Submitting,
    AwaitingGraph,
    Failed,
    Ready,
}

/// 提交状态 - 界面展示内容的唯一事实来源
///
/// 由编排层独占持有和修改，展示层只读。
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    /// 用户原始输入的表达式
    pub expression: String,
    /// 用户原始输入的下限（未解析）
    pub lower_limit: String,
    /// 用户原始输入的上限（未解析）
    pub upper_limit: String,
    /// 还原为展示语法的计算结果
    pub result: CalculationResult,
    /// 当前图像，成功完成一次完整提交后才存在
    pub graph: Option<GraphHandle>,
    /// 展示给用户的错误消息
    pub error: Option<String>,
    pub phase: SubmissionPhase,
}

impl SubmissionState {
    /// 恢复到初始空状态
    ///
    /// 旧的图像句柄随赋值被释放。
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_idle() {
        let state = SubmissionState::default();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(state.result.is_empty());
        assert!(state.graph.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_reset_releases_graph_and_clears_fields() {
        let mut state = SubmissionState {
            expression: "2x^2".to_string(),
            lower_limit: "0".to_string(),
            upper_limit: "1".to_string(),
            graph: Some(GraphHandle::new(vec![1, 2, 3])),
            error: Some("错误".to_string()),
            phase: SubmissionPhase::Ready,
            ..Default::default()
        };
        state.reset();
        assert!(state.expression.is_empty());
        assert!(state.lower_limit.is_empty());
        assert!(state.upper_limit.is_empty());
        assert!(state.graph.is_none());
        assert!(state.error.is_none());
        assert_eq!(state.phase, SubmissionPhase::Idle);
    }
}
