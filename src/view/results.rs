//! 推荐结果展示

use crate::error::AppResult;
use crate::models::Recommendation;
use std::fmt::Write;

/// 匹配度条宽度（字符）
const METER_WIDTH: usize = 20;

/// 逐词首字母大写，其余字符保持原样
pub fn format_career_name(career: &str) -> String {
    career
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 匹配度转为整数百分比
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

/// 文本匹配度条，百分比限制在 0-100
pub fn meter_bar(percent: i64) -> String {
    let filled = (percent.clamp(0, 100) as usize * METER_WIDTH) / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled)
    )
}

/// 渲染推荐列表
pub fn render_results(recommendations: &[Recommendation]) -> String {
    let mut out = String::from("Your Top Career Matches\n");
    for (index, item) in recommendations.iter().enumerate() {
        let percent = confidence_percent(item.confidence);
        let _ = writeln!(out, "  {}. {}", index + 1, format_career_name(&item.career));
        let _ = writeln!(out, "     {} {}% match", meter_bar(percent), percent);
    }
    out
}

/// 渲染错误信息（原样展示）
pub fn render_error(message: &str) -> String {
    format!("❌ {}\n", message)
}

/// 渲染一次提交的结果
pub fn render_outcome(outcome: &AppResult<Vec<Recommendation>>) -> String {
    match outcome {
        Ok(recommendations) => render_results(recommendations),
        Err(e) => render_error(&e.to_string()),
    }
}
