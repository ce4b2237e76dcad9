/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 积分/绘图服务的基础URL（两个端点挂在同一服务下）
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("INTEGRAL_API_BASE_URL").unwrap_or(default.api_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 积分计算端点
    pub fn calculate_endpoint(&self) -> String {
        format!("{}/calculate-integral", self.api_base_url)
    }

    /// 图像获取端点
    pub fn graph_endpoint(&self) -> String {
        format!("{}/get-graph", self.api_base_url)
    }
}
