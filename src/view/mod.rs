//! 展示层：把问卷和推荐结果渲染成终端文本

pub mod form;
pub mod results;

pub use results::{confidence_percent, format_career_name, render_outcome};
