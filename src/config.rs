/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 推荐服务地址（不含 /recommend）
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 答案文件路径，设置后以批处理模式运行
    pub answers_file: Option<String>,
    /// 是否使用系统代理（HTTP_PROXY 等）
    pub use_system_proxy: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 30,
            answers_file: None,
            use_system_proxy: true,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("RECOMMEND_API_BASE_URL").unwrap_or(default.api_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            answers_file: std::env::var("ANSWERS_FILE").ok().filter(|v| !v.trim().is_empty()).or(default.answers_file),
            use_system_proxy: std::env::var("USE_SYSTEM_PROXY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.use_system_proxy),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 命令行第一个参数优先于 ANSWERS_FILE
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(path) = args.next() {
            self.answers_file = Some(path);
        }
        self
    }

    /// 完整的推荐接口地址
    pub fn recommend_url(&self) -> String {
        format!("{}/recommend", self.api_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_url_strips_trailing_slash() {
        let config = Config {
            api_base_url: "http://localhost:5000/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.recommend_url(), "http://localhost:5000/recommend");
    }

    #[test]
    fn test_args_override_answers_file() {
        let config = Config::default().with_args(vec!["answers.toml".to_string()].into_iter());
        assert_eq!(config.answers_file.as_deref(), Some("answers.toml"));

        let config = Config::default().with_args(std::iter::empty());
        assert!(config.answers_file.is_none());
    }

    #[test]
    fn test_system_proxy_toggle() {
        assert!(Config::default().use_system_proxy);

        std::env::set_var("USE_SYSTEM_PROXY", "false");
        let config = Config::from_env();
        std::env::remove_var("USE_SYSTEM_PROXY");
        assert!(!config.use_system_proxy);
    }
}
