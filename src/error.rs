//! 应用程序错误类型
//!
//! 三类错误全部是本地可恢复的：前两类在发起网络请求之前就被拦截，
//! 第三类覆盖两个远程调用的所有传输/状态码/解码失败。
//! 界面上只展示一条人类可读的消息，错误种类仅用于选择展示哪条消息。

use thiserror::Error;

/// 提交流程错误
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 只填写了上下限中的一个
    #[error("积分上下限只提供了一个")]
    IncompleteBounds,

    /// 表达式去除空白后为空
    #[error("未输入数学表达式")]
    EmptyExpression,

    /// 远程调用失败（传输、服务端状态码或响应解码）
    #[error("远程服务请求失败: {0}")]
    RequestFailed(String),
}

impl SubmitError {
    /// 选择展示给用户的消息
    ///
    /// 详细原因只进日志，不进界面。
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::IncompleteBounds => "如果输入了其中一个积分上下限，另一个也必须填写。",
            SubmitError::EmptyExpression => "请输入一个数学表达式。",
            SubmitError::RequestFailed(_) => "计算积分或获取图像时发生错误。",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::RequestFailed(err.to_string())
    }
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, SubmitError>;
