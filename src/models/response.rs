use serde::Deserialize;

/// 服务端表示"未提供上下限"的哨兵字符串
///
/// 这是积分服务的线上字面量，必须原样比较、原样展示，不做还原替换。
pub const NO_BOUNDS_SENTINEL: &str = "No se proporcionaron límites";

/// 积分服务的响应载荷
///
/// 字段内容是服务端语法（`**`、显式乘号），展示前需要逐字段还原。
#[derive(Debug, Clone, Deserialize)]
pub struct IntegralResponse {
    pub indefinite_integral: String,
    pub defined_integral: String,
    /// 逐步求解过程，顺序即解题顺序
    #[serde(default)]
    pub explanation: Vec<String>,
}

/// 展示侧的计算结果
///
/// 所有字段已经还原为展示语法；`defined` 可能是原样保留的哨兵字符串。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationResult {
    pub indefinite: String,
    pub defined: String,
    pub steps: Vec<String>,
}

impl CalculationResult {
    /// 是否还没有任何结果
    pub fn is_empty(&self) -> bool {
        self.indefinite.is_empty() && self.defined.is_empty() && self.steps.is_empty()
    }
}
