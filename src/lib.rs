pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;

pub use analysis::{normalize, AnalysisPipeline, SkillMatcher};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{AnalysisReport, MatchLabel, MatchResult};
