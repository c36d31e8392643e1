//! 交互会话 - 流程层
//!
//! 把终端输入的每一行转换成对问卷的一次操作，`submit` 时走一次完整的请求/展示流程

use crate::clients::RecommendApi;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{InterestResponse, Question, Questionnaire, Subject};
use crate::services::SubmissionService;
use crate::view::{form, results};
use crate::workflow::command::Command;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

/// 会话统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// 实际发出的请求数
    pub submissions: usize,
    /// 被校验拦下的提交数
    pub blocked: usize,
    /// 最近一次请求是否成功
    pub last_succeeded: bool,
}

/// 交互会话
pub struct Session<'a, C, R, W> {
    service: &'a SubmissionService<C>,
    questionnaire: Questionnaire,
    lines: Lines<R>,
    out: W,
    summary: SessionSummary,
}

impl<'a, C, R, W> Session<'a, C, R, W>
where
    C: RecommendApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(service: &'a SubmissionService<C>, input: R, out: W) -> Self {
        Self {
            service,
            questionnaire: Questionnaire::new(),
            lines: input.lines(),
            out,
            summary: SessionSummary::default(),
        }
    }

    /// 运行会话直到 quit 或输入结束
    pub async fn run(mut self) -> AppResult<SessionSummary> {
        self.write("Career Recommendation Questionnaire\n\n").await?;
        self.write(&form::render_help()).await?;
        let checklist = form::render_subjects(&self.questionnaire);
        self.write(&checklist).await?;

        loop {
            self.write("> ").await?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(hint) => {
                    self.write(&format!("{}\n", hint)).await?;
                    continue;
                }
            };
            debug!("命令: {:?}", command);

            match command {
                Command::Empty => {}
                Command::Quit => break,
                Command::Help => self.write(&form::render_help()).await?,
                Command::Subjects => {
                    let text = form::render_subjects(&self.questionnaire);
                    self.write(&text).await?
                }
                Command::Questions => {
                    let text = form::render_questions(&self.questionnaire);
                    self.write(&text).await?
                }
                Command::Status => {
                    let text = form::render_status(&self.questionnaire);
                    self.write(&text).await?
                }
                Command::Pick(tokens) => self.pick(&tokens).await?,
                Command::Answer { id, response } => self.answer(id, &response).await?,
                Command::Ask => {
                    if !self.ask().await? {
                        break;
                    }
                }
                Command::Submit => self.submit().await?,
            }
        }

        self.out.flush().await?;
        Ok(self.summary)
    }

    async fn pick(&mut self, tokens: &[String]) -> AppResult<()> {
        for token in tokens {
            match Subject::resolve(token) {
                Some(subject) => {
                    let message = if self.questionnaire.toggle_subject(&subject) {
                        format!("✓ Checked {}\n", subject)
                    } else {
                        format!("✗ Unchecked {}\n", subject)
                    };
                    self.write(&message).await?;
                }
                None => {
                    self.write(&format!("Unknown subject number: {}\n", token))
                        .await?
                }
            }
        }
        Ok(())
    }

    async fn answer(&mut self, id: u8, input: &str) -> AppResult<()> {
        let Some(response) = InterestResponse::parse(input) else {
            return self.write("Please answer y or n\n").await;
        };
        let message = match self.questionnaire.answer(id, response) {
            Ok(Some(previous)) if previous != response => {
                format!("Question {}: {} (was {})\n", id, response, previous)
            }
            Ok(_) => format!("Question {}: {}\n", id, response),
            Err(e) => format!("{}\n", e),
        };
        self.write(&message).await
    }

    /// 逐题询问未作答的题目
    ///
    /// # 返回
    /// 输入结束时返回 false
    async fn ask(&mut self) -> AppResult<bool> {
        let pending: Vec<Question> = self.questionnaire.unanswered().collect();
        if pending.is_empty() {
            self.write("All questions are answered.\n").await?;
            return Ok(true);
        }

        for question in pending {
            loop {
                self.write(&format!("{}\n? ", form::render_prompt(&question)))
                    .await?;
                let Some(line) = self.lines.next_line().await? else {
                    return Ok(false);
                };
                let line = line.trim();
                if line.is_empty() {
                    break;
                }
                if line.eq_ignore_ascii_case("stop") {
                    let text = form::render_status(&self.questionnaire);
                    self.write(&text).await?;
                    return Ok(true);
                }
                match InterestResponse::parse(line) {
                    Some(response) => {
                        self.questionnaire.answer(question.id, response)?;
                        break;
                    }
                    None => self.write("Please answer y or n\n").await?,
                }
            }
        }

        let text = form::render_status(&self.questionnaire);
        self.write(&text).await?;
        Ok(true)
    }

    async fn submit(&mut self) -> AppResult<()> {
        let outcome = self.service.submit(&self.questionnaire).await;
        let text = match &outcome {
            Err(e) if e.is_validation() => {
                self.summary.blocked += 1;
                format!("⚠️ {}\n", e)
            }
            Err(AppError::Api(ApiError::Busy)) => format!("⚠️ {}\n", ApiError::Busy),
            _ => {
                self.summary.submissions += 1;
                self.summary.last_succeeded = outcome.is_ok();
                results::render_outcome(&outcome)
            }
        };
        self.write(&text).await
    }

    async fn write(&mut self, text: &str) -> AppResult<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
