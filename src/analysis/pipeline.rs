use chrono::Utc;

use crate::analysis::matcher::SkillMatcher;
use crate::analysis::normalizer::normalize;
use crate::analysis::suggestions::improvement_suggestions;
use crate::config::Config;
use crate::models::{AnalysisReport, MatchLabel};

/// Runs a full analysis: normalize the resume text, classify every
/// requested skill, then derive the label and advice for rendering.
/// Every invocation owns its own data; nothing is cached across calls.
pub struct AnalysisPipeline {
    matcher: SkillMatcher,
}

impl AnalysisPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            matcher: SkillMatcher::new(config.fuzzy_threshold),
        }
    }

    pub fn analyze(&self, raw_resume_text: &str, skill_input: &str) -> AnalysisReport {
        let resume_text = normalize(raw_resume_text);

        tracing::info!(
            resume_chars = resume_text.len(),
            "running skill match analysis"
        );

        let result = self.matcher.match_skills(&resume_text, skill_input);
        let label = MatchLabel::from_percentage(result.match_percentage);
        let suggestions = improvement_suggestions(&result);

        AnalysisReport {
            result,
            label,
            suggestions,
            analyzed_at: Utc::now(),
        }
    }
}
