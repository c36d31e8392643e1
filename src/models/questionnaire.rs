//! 问卷状态
//!
//! 保存用户的科目勾选与兴趣题回答，提交时一次性读出

use crate::error::ValidationError;
use crate::models::question::{InterestResponse, Question, QUESTION_COUNT};
use crate::models::recommendation::RecommendRequest;
use crate::models::subject::Subject;
use std::collections::BTreeMap;

/// 最少勾选科目数
pub const MIN_SUBJECTS: usize = 3;
/// 最少作答题数
pub const MIN_ANSWERED: usize = 10;

/// 问卷
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Questionnaire {
    /// 已选科目（按勾选顺序）
    subjects: Vec<String>,
    /// 题号 -> 回答
    answers: BTreeMap<u8, InterestResponse>,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    /// 回答一道题，覆盖之前的回答
    ///
    /// # 返回
    /// 返回该题之前的回答
    pub fn answer(
        &mut self,
        id: u8,
        response: InterestResponse,
    ) -> Result<Option<InterestResponse>, ValidationError> {
        if Question::get(id).is_none() {
            return Err(ValidationError::UnknownQuestion {
                id: id.into(),
                max: QUESTION_COUNT,
            });
        }
        Ok(self.answers.insert(id, response))
    }

    pub fn response(&self, id: u8) -> Option<InterestResponse> {
        self.answers.get(&id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// 尚未作答的题目
    pub fn unanswered(&self) -> impl Iterator<Item = Question> + '_ {
        Question::all().filter(move |q| !self.answers.contains_key(&q.id))
    }

    /// 勾选或取消勾选一个科目
    ///
    /// # 返回
    /// 返回操作后该科目是否处于选中状态
    pub fn toggle_subject(&mut self, subject: &str) -> bool {
        if let Some(pos) = self.subjects.iter().position(|s| Subject::same(s, subject)) {
            self.subjects.remove(pos);
            false
        } else {
            self.subjects.push(subject.trim().to_string());
            true
        }
    }

    /// 勾选科目（已选中则不变）
    pub fn select_subject(&mut self, subject: &str) {
        if !self.is_selected(subject) {
            self.subjects.push(subject.trim().to_string());
        }
    }

    pub fn is_selected(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| Subject::same(s, subject))
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// 校验最低完成度，先查科目再查题目
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subjects.len() < MIN_SUBJECTS {
            return Err(ValidationError::TooFewSubjects {
                selected: self.subjects.len(),
                required: MIN_SUBJECTS,
            });
        }
        if self.answers.len() < MIN_ANSWERED {
            return Err(ValidationError::TooFewAnswers {
                answered: self.answers.len(),
                required: MIN_ANSWERED,
            });
        }
        Ok(())
    }

    /// 校验通过后构建请求体，只包含已作答的题目
    pub fn to_request(&self) -> Result<RecommendRequest, ValidationError> {
        self.validate()?;
        Ok(RecommendRequest {
            subjects: self.subjects.clone(),
            interests: self
                .answers
                .iter()
                .map(|(id, response)| (*id, response.value()))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(subjects: &[&str], answered: u8) -> Questionnaire {
        let mut q = Questionnaire::new();
        for s in subjects {
            q.select_subject(s);
        }
        for id in 1..=answered {
            let response = if id % 2 == 0 {
                InterestResponse::Yes
            } else {
                InterestResponse::No
            };
            q.answer(id, response).unwrap();
        }
        q
    }

    #[test]
    fn test_reanswer_overwrites() {
        let mut q = Questionnaire::new();
        assert_eq!(q.answer(5, InterestResponse::Yes).unwrap(), None);
        assert_eq!(
            q.answer(5, InterestResponse::No).unwrap(),
            Some(InterestResponse::Yes)
        );
        assert_eq!(q.answered_count(), 1);
        assert_eq!(q.response(5), Some(InterestResponse::No));
    }

    #[test]
    fn test_unknown_question_rejected() {
        let mut q = Questionnaire::new();
        assert!(matches!(
            q.answer(31, InterestResponse::Yes),
            Err(ValidationError::UnknownQuestion { id: 31, .. })
        ));
        assert_eq!(q.answered_count(), 0);
    }

    #[test]
    fn test_toggle_subject() {
        let mut q = Questionnaire::new();
        assert!(q.toggle_subject("Physics"));
        assert!(q.is_selected("physics"));
        assert!(!q.toggle_subject("PHYSICS"));
        assert!(q.subjects().is_empty());
    }

    #[test]
    fn test_subjects_checked_before_answers() {
        let q = filled(&["Math", "Physics"], 0);
        assert_eq!(
            q.validate(),
            Err(ValidationError::TooFewSubjects {
                selected: 2,
                required: 3
            })
        );
    }

    #[test]
    fn test_too_few_answers() {
        let q = filled(&["Math", "Physics", "Biology"], 9);
        assert_eq!(
            q.validate(),
            Err(ValidationError::TooFewAnswers {
                answered: 9,
                required: 10
            })
        );
    }

    #[test]
    fn test_request_contains_only_answered_ids() {
        let q = filled(&["Math", "Physics", "Biology"], 10);
        let request = q.to_request().unwrap();
        assert_eq!(request.subjects, vec!["Math", "Physics", "Biology"]);
        assert_eq!(request.interests.len(), 10);
        assert_eq!(request.interests.get(&2), Some(&1));
        assert_eq!(request.interests.get(&3), Some(&0));
        assert!(request.interests.get(&11).is_none());
    }

    #[test]
    fn test_unanswered() {
        let q = filled(&[], 28);
        let rest: Vec<u8> = q.unanswered().map(|q| q.id).collect();
        assert_eq!(rest, vec![29, 30]);
    }
}
