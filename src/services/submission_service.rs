//! 提交服务 - 业务能力层
//!
//! 校验问卷、保证同一时间只有一个请求在途、调用推荐服务

use crate::clients::RecommendApi;
use crate::error::{ApiError, AppResult};
use crate::models::{Questionnaire, Recommendation};
use crate::utils::logging;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// 提交服务
///
/// 职责：
/// - 校验不通过时直接返回，不发请求
/// - 请求在途期间拒绝新的提交（相当于禁用提交按钮）
/// - 请求结束（成功或失败）后恢复可提交状态
pub struct SubmissionService<C> {
    client: C,
    /// 单个许可，持有期间即为请求在途
    in_flight: Semaphore,
}

impl<C: RecommendApi> SubmissionService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            in_flight: Semaphore::new(1),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 是否有请求在途
    pub fn is_busy(&self) -> bool {
        self.in_flight.available_permits() == 0
    }

    /// 提交问卷
    ///
    /// # 返回
    /// 返回后端给出的推荐列表
    pub async fn submit(&self, questionnaire: &Questionnaire) -> AppResult<Vec<Recommendation>> {
        let _permit = self.in_flight.try_acquire().map_err(|_| {
            warn!("⚠️ 已有请求在处理中，忽略本次提交");
            ApiError::Busy
        })?;

        let request = questionnaire.to_request().map_err(|e| {
            warn!("⚠️ 校验未通过: {}", e);
            e
        })?;

        logging::log_submission(request.subjects.len(), request.interests.len());
        info!("⏳ Processing...");

        let result = self.client.recommend(&request).await;
        logging::log_outcome(result.as_ref().ok().map(Vec::len));
        result
    }
}
