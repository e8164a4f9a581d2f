pub mod client;
pub mod types;
pub mod validate;

pub use client::AnalysisClient;
pub use types::{MenuAnalysis, NotRecommendedDish, OtherOption, RecommendedDish, WirePreferences};
pub use validate::parse_analysis;
