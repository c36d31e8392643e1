pub mod toml_loader;

pub use toml_loader::{load_answers_file, parse_answers, AnswersFile};
