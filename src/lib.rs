//! # Career Advisor
//!
//! 职业推荐问卷的终端客户端：展示 30 道兴趣题和科目清单，校验最低完成度，
//! 把答案 POST 到 `/recommend`，再把返回的推荐列表按排名展示出来。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题表、科目清单、问卷状态、请求/响应结构
//! - `loaders` - 从 TOML 答案文件构建问卷
//!
//! ### ② 客户端层（Clients）
//! - `RecommendApi` - 推荐服务能力
//! - `RecommendClient` - 基于 reqwest 的实现，只发一次，不重试
//!
//! ### ③ 业务能力层（Services）
//! - `SubmissionService` - 校验 + 在途请求互斥 + 调用推荐服务
//!
//! ### ④ 流程层（Workflow）
//! - `Session` - 交互命令循环，每条命令对应一次点击
//!
//! ### ⑤ 展示层（View）
//! - `view::form` / `view::results` - 终端文本渲染
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod view;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{RecommendApi, RecommendClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{InterestResponse, Question, Questionnaire, RecommendRequest, Recommendation};
pub use services::SubmissionService;
pub use workflow::{Session, SessionSummary};
