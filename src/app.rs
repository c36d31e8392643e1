use crate::clients::RecommendClient;
use crate::config::Config;
use crate::models::load_answers_file;
use crate::services::SubmissionService;
use crate::utils::logging;
use crate::view::results;
use crate::workflow::Session;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    service: SubmissionService<RecommendClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let client = RecommendClient::new(&config).context("无法创建推荐服务客户端")?;

        logging::log_startup(client.endpoint(), config.answers_file.is_some());

        Ok(Self {
            config,
            service: SubmissionService::new(client),
        })
    }

    /// 运行应用主逻辑
    ///
    /// # 返回
    /// 批处理模式下返回是否拿到推荐；交互模式下返回最后一次请求是否成功
    pub async fn run(&self) -> Result<bool> {
        match &self.config.answers_file {
            Some(path) => self.run_batch(Path::new(path)).await,
            None => self.run_interactive().await,
        }
    }

    /// 批处理：读取答案文件，提交一次后退出
    async fn run_batch(&self, path: &Path) -> Result<bool> {
        let questionnaire = load_answers_file(path)
            .await
            .with_context(|| format!("无法加载答案文件: {}", path.display()))?;

        let outcome = self.service.submit(&questionnaire).await;
        let rendered = match &outcome {
            Err(e) if e.is_validation() => format!("⚠️ {}\n", e),
            _ => results::render_outcome(&outcome),
        };

        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;

        if let Err(e) = &outcome {
            error!("❌ 提交失败: {}", e);
        }
        Ok(outcome.is_ok())
    }

    /// 交互模式：从 stdin 读命令
    async fn run_interactive(&self) -> Result<bool> {
        let input = BufReader::new(tokio::io::stdin());
        let summary = Session::new(&self.service, input, tokio::io::stdout())
            .run()
            .await
            .context("交互会话异常结束")?;

        info!("{}", "=".repeat(60));
        info!(
            "📊 会话结束: 发出 {} 次请求, {} 次提交被校验拦下",
            summary.submissions, summary.blocked
        );
        info!("{}", "=".repeat(60));

        if summary.submissions > 0 && !summary.last_succeeded {
            warn!("⚠️ 最后一次请求未成功");
        }
        Ok(summary.submissions == 0 || summary.last_succeeded)
    }
}
