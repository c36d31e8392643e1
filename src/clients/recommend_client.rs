/// 推荐服务客户端
///
/// 封装 POST /recommend 调用，只发一次，不重试
use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::{RecommendRequest, RecommendResponse, Recommendation};
use crate::utils::logging::truncate_text;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// 推荐服务能力
pub trait RecommendApi {
    /// 提交问卷，返回按匹配度排好序的推荐
    fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> impl Future<Output = AppResult<Vec<Recommendation>>> + Send;
}

/// 基于 reqwest 的推荐服务客户端
#[derive(Clone)]
pub struct RecommendClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RecommendClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.recommend_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecommendApi for RecommendClient {
    async fn recommend(&self, request: &RecommendRequest) -> AppResult<Vec<Recommendation>> {
        debug!(
            "POST {} payload: {}",
            self.endpoint,
            truncate_text(&serde_json::to_string(request).unwrap_or_default(), 200)
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("推荐请求失败: {}", e);
                AppError::network(&self.endpoint, e)
            })?;

        // 后端在响应体里报告失败，不看状态码
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(&self.endpoint, e))?;

        debug!("响应 {}: {}", status, truncate_text(&body, 200));

        let parsed: RecommendResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("响应解析失败 ({}): {}", status, e);
            AppError::network(&self.endpoint, format!("invalid response ({}): {}", status, e))
        })?;

        parsed.into_result()
    }
}
