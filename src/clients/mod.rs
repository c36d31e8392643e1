pub mod recommend_client;

pub use recommend_client::{RecommendApi, RecommendClient};
