use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// POST /recommend 请求体
///
/// `interests` 的题号在 JSON 中序列化为字符串键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub subjects: Vec<String>,
    pub interests: BTreeMap<u8, u8>,
}

/// 单条职业推荐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub career: String,
    pub confidence: f64,
}

/// POST /recommend 响应体
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RecommendResponse {
    /// success=false 时转为 Rejected 错误
    pub fn into_result(self) -> AppResult<Vec<Recommendation>> {
        if self.success {
            Ok(self.recommendations)
        } else {
            Err(AppError::rejected(self.error))
        }
    }
}
