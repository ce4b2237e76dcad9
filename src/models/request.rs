use serde::Serialize;

/// 定积分上下限
///
/// 类型上强制"要么都有、要么都没有"：校验通过之后不存在只有一个的情况。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    #[serde(rename = "lower_limit")]
    pub lower: f64,
    #[serde(rename = "upper_limit")]
    pub upper: f64,
}

/// 发往积分服务的请求载荷
///
/// `expression` 必须是规范化之后的服务端语法，不允许直接放入用户原文。
/// 没有上下限时整个 `bounds` 字段不出现在 JSON 中。
#[derive(Debug, Clone, Serialize)]
pub struct CalculationRequest {
    pub expression: String,
    #[serde(flatten)]
    pub bounds: Option<Bounds>,
}

impl CalculationRequest {
    /// 创建不定积分请求
    pub fn indefinite(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            bounds: None,
        }
    }

    /// 创建定积分请求
    pub fn definite(expression: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            expression: expression.into(),
            bounds: Some(Bounds { lower, upper }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_without_bounds_omits_limit_fields() {
        let request = CalculationRequest::indefinite("2*x**2");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["expression"], "2*x**2");
        assert!(json.get("lower_limit").is_none());
        assert!(json.get("upper_limit").is_none());
    }

    #[test]
    fn test_serialize_with_bounds_flattens_limits() {
        let request = CalculationRequest::definite("x**3", 0.0, 1.5);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["expression"], "x**3");
        assert_eq!(json["lower_limit"], 0.0);
        assert_eq!(json["upper_limit"], 1.5);
    }
}
