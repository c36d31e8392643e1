use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单校验错误（不会发出请求）
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// API 调用错误
    #[error(transparent)]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 终端读写错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 表单校验错误
///
/// Display 文本会原样展示给用户
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 勾选的科目不足
    #[error("Please select at least {required} subjects you have studied")]
    TooFewSubjects { selected: usize, required: usize },
    /// 回答的兴趣题不足
    #[error("Please answer at least {required} interest questions")]
    TooFewAnswers { answered: usize, required: usize },
    /// 题号不在题表中
    #[error("Unknown question id {id} (expected 1-{max})")]
    UnknownQuestion { id: i64, max: u8 },
    /// 答案文件中的题号不是数字
    #[error("Invalid question id '{key}' (expected 1-{max})")]
    InvalidQuestionKey { key: String, max: u8 },
    /// 回答值不是 0/1
    #[error("Invalid response {value} for question {id} (expected 0 or 1)")]
    InvalidResponse { id: u8, value: i64 },
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（含响应体无法解析）
    #[error("Network error: {detail}")]
    Network { endpoint: String, detail: String },
    /// 后端返回 success=false
    #[error("{message}")]
    Rejected { message: String },
    /// 上一次请求尚未完成
    #[error("A recommendation request is already in progress")]
    Busy,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// HTTP 客户端构建失败
    #[error("HTTP客户端初始化失败: {0}")]
    HttpClient(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络错误
    pub fn network(endpoint: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        AppError::Api(ApiError::Network {
            endpoint: endpoint.into(),
            detail: detail.to_string(),
        })
    }

    /// 创建后端拒绝错误，缺省信息与页面一致
    pub fn rejected(message: Option<String>) -> Self {
        AppError::Api(ApiError::Rejected {
            message: message.unwrap_or_else(|| "Unknown error occurred".to_string()),
        })
    }

    /// 是否为校验错误（即没有发出任何请求）
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        let err: AppError = ValidationError::TooFewSubjects {
            selected: 2,
            required: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Please select at least 3 subjects you have studied"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_rejected_defaults_to_unknown_error() {
        assert_eq!(AppError::rejected(None).to_string(), "Unknown error occurred");
        assert_eq!(
            AppError::rejected(Some("bad input".into())).to_string(),
            "bad input"
        );
    }

    #[test]
    fn test_wrapped_errors_print_once_in_chain() {
        let err: AppError = ValidationError::UnknownQuestion { id: 31, max: 30 }.into();
        assert!(std::error::Error::source(&err).is_none());

        let chained = anyhow::Error::from(err).context("无法加载答案文件");
        assert_eq!(
            format!("{:#}", chained),
            "无法加载答案文件: Unknown question id 31 (expected 1-30)"
        );
    }

    #[test]
    fn test_network_error_prefix() {
        let err = AppError::network("/recommend", "connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert!(!err.is_validation());
    }
}
