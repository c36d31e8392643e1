use crate::error::{AppResult, FileError, ValidationError};
use crate::models::question::{InterestResponse, QUESTION_COUNT};
use crate::models::questionnaire::Questionnaire;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// 答案文件内容
///
/// ```toml
/// subjects = ["mathematics", "physics", "biology"]
///
/// [interests]
/// 1 = 1
/// 2 = 0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AnswersFile {
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub interests: BTreeMap<String, i64>,
}

impl AnswersFile {
    /// 转换为问卷，题号与取值不合法时报错
    pub fn into_questionnaire(self) -> Result<Questionnaire, ValidationError> {
        let mut questionnaire = Questionnaire::new();
        for subject in &self.subjects {
            if !subject.trim().is_empty() {
                questionnaire.select_subject(subject);
            }
        }
        for (key, value) in &self.interests {
            let raw = key.trim().parse::<i64>().map_err(|_| {
                ValidationError::InvalidQuestionKey {
                    key: key.clone(),
                    max: QUESTION_COUNT,
                }
            })?;
            let id = u8::try_from(raw)
                .ok()
                .filter(|id| (1..=QUESTION_COUNT).contains(id))
                .ok_or(ValidationError::UnknownQuestion {
                    id: raw,
                    max: QUESTION_COUNT,
                })?;
            let response = InterestResponse::from_value(*value)
                .ok_or(ValidationError::InvalidResponse { id, value: *value })?;
            questionnaire.answer(id, response)?;
        }
        Ok(questionnaire)
    }
}

/// 解析答案文件文本
pub fn parse_answers(content: &str, path: &str) -> AppResult<Questionnaire> {
    let file: AnswersFile = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
        path: path.to_string(),
        source,
    })?;
    Ok(file.into_questionnaire()?)
}

/// 从 TOML 文件加载问卷
pub async fn load_answers_file(path: &Path) -> AppResult<Questionnaire> {
    let path_text = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path_text.clone(),
            source,
        })?;

    let questionnaire = parse_answers(&content, &path_text)?;
    tracing::info!(
        "成功加载答案文件 {}: {} 个科目, {} 道题",
        path_text,
        questionnaire.subjects().len(),
        questionnaire.answered_count()
    );
    Ok(questionnaire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_parse_answers() {
        let content = r#"
subjects = ["Math", "Physics", "Biology"]

[interests]
1 = 1
17 = 1
30 = 0
"#;
        let q = parse_answers(content, "answers.toml").unwrap();
        assert_eq!(q.subjects(), ["Math", "Physics", "Biology"]);
        assert_eq!(q.answered_count(), 3);
        assert_eq!(q.response(30), Some(InterestResponse::No));
    }

    #[test]
    fn test_rejects_out_of_range_question() {
        let content = "subjects = []\n[interests]\n31 = 1\n";
        let err = parse_answers(content, "answers.toml").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::UnknownQuestion { id: 31, .. })
        ));
    }

    #[test]
    fn test_rejects_non_numeric_question_key() {
        let content = "[interests]\nabc = 1\n";
        let err = parse_answers(content, "answers.toml").unwrap_err();
        assert!(matches!(
            &err,
            AppError::Validation(ValidationError::InvalidQuestionKey { key, .. }) if key == "abc"
        ));
        assert_eq!(err.to_string(), "Invalid question id 'abc' (expected 1-30)");
    }

    #[tokio::test]
    async fn test_load_answers_file_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("career_advisor_load_{}.toml", std::process::id()));
        let content = "subjects = [\"ict\", \"law\", \"art\"]\n[interests]\n2 = 1\n";
        fs::write(&path, content).await.unwrap();

        let q = load_answers_file(&path).await.unwrap();
        let _ = fs::remove_file(&path).await;

        assert_eq!(q.subjects(), ["ict", "law", "art"]);
        assert_eq!(q.response(2), Some(InterestResponse::Yes));
    }

    #[test]
    fn test_rejects_non_binary_response() {
        let content = "[interests]\n4 = 2\n";
        let err = parse_answers(content, "answers.toml").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidResponse { id: 4, value: 2 })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_answers("subjects = [", "broken.toml").unwrap_err();
        assert!(matches!(err, AppError::File(FileError::TomlParseFailed { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = tokio_test::block_on(load_answers_file(Path::new("/nonexistent/answers.toml")))
            .unwrap_err();
        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
    }
}
