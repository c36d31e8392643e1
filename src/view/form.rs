//! 问卷表单展示

use crate::models::{
    Question, Questionnaire, Subject, MIN_ANSWERED, MIN_SUBJECTS, QUESTION_COUNT,
    SUBJECT_CATALOGUE,
};
use crate::view::results::format_career_name;
use std::fmt::Write;

/// 渲染全部兴趣题及当前回答
pub fn render_questions(questionnaire: &Questionnaire) -> String {
    let mut out = String::new();
    for question in Question::all() {
        let mark = questionnaire
            .response(question.id)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "[{:^3}] {}", mark, question);
    }
    out
}

/// 渲染单道题的提问行
pub fn render_prompt(question: &Question) -> String {
    format!("{} (y/n, Enter to skip, 'stop' to finish)", question)
}

/// 渲染科目清单，已选中的打勾；清单外的自定义科目列在最后
pub fn render_subjects(questionnaire: &Questionnaire) -> String {
    let mut out = String::from("Subjects you have studied:\n");
    for (index, subject) in SUBJECT_CATALOGUE.iter().enumerate() {
        let mark = if questionnaire.is_selected(subject) { 'x' } else { ' ' };
        let label = format_career_name(subject);
        let _ = writeln!(out, "  [{}] {:>2}. {}", mark, index + 1, label);
    }
    for custom in questionnaire
        .subjects()
        .iter()
        .filter(|s| Subject::find(s).is_none())
    {
        let _ = writeln!(out, "  [x]  *. {}", custom);
    }
    out
}

/// 渲染完成度
pub fn render_status(questionnaire: &Questionnaire) -> String {
    format!(
        "Subjects selected: {} (min {}), questions answered: {}/{} (min {})\n",
        questionnaire.subjects().len(),
        MIN_SUBJECTS,
        questionnaire.answered_count(),
        QUESTION_COUNT,
        MIN_ANSWERED
    )
}

/// 渲染帮助
pub fn render_help() -> String {
    [
        "Commands:",
        "  subjects                 show the subject checklist",
        "  pick <n|name>[, ...]     check or uncheck subjects",
        "  questions                show all interest questions",
        "  answer <id> <y|n>        answer (or change) one question",
        "  ask                      go through unanswered questions",
        "  status                   show progress",
        "  submit                   get career recommendations",
        "  help                     show this help",
        "  quit                     exit",
        "",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InterestResponse;

    #[test]
    fn test_render_questions_marks_answers() {
        let mut q = Questionnaire::new();
        q.answer(1, InterestResponse::Yes).unwrap();
        let rendered = render_questions(&q);
        assert_eq!(rendered.lines().count(), 30);
        assert!(rendered.lines().next().unwrap().starts_with("[Yes] 1. "));
        assert!(rendered.lines().nth(1).unwrap().starts_with("[ - ] 2. "));
    }

    #[test]
    fn test_render_subjects() {
        let mut q = Questionnaire::new();
        q.select_subject("physics");
        q.select_subject("Robotics");
        let rendered = render_subjects(&q);
        assert!(rendered.contains("[x]  9. Physics"));
        assert!(rendered.contains("[ ]  1. English"));
        assert!(rendered.contains("[x]  *. Robotics"));
    }

    #[test]
    fn test_catalogue_subject_in_other_case_is_not_custom() {
        let mut q = Questionnaire::new();
        q.select_subject(" Further MATHEMATICS ");
        let rendered = render_subjects(&q);
        assert!(rendered.contains("[x]  8. Further Mathematics"));
        assert!(!rendered.contains("*."));
    }

    #[test]
    fn test_render_status() {
        let q = Questionnaire::new();
        assert_eq!(
            render_status(&q),
            "Subjects selected: 0 (min 3), questions answered: 0/30 (min 10)\n"
        );
    }
}
