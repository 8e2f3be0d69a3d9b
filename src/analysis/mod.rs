pub mod matcher;
pub mod normalizer;
pub mod pipeline;
pub mod suggestions;

pub use matcher::SkillMatcher;
pub use normalizer::normalize;
pub use pipeline::AnalysisPipeline;
pub use suggestions::improvement_suggestions;
