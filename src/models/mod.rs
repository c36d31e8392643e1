pub mod loaders;
pub mod question;
pub mod questionnaire;
pub mod recommendation;
pub mod subject;

pub use loaders::{load_answers_file, parse_answers};
pub use question::{InterestResponse, Question, INTEREST_QUESTIONS, QUESTION_COUNT};
pub use questionnaire::{Questionnaire, MIN_ANSWERED, MIN_SUBJECTS};
pub use recommendation::{RecommendRequest, RecommendResponse, Recommendation};
pub use subject::{Subject, SUBJECT_CATALOGUE};
