use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_skills: Vec<String>,
    pub unmatched_skills: Vec<String>,
    pub match_percentage: f64,
}

impl MatchResult {
    pub fn skill_count(&self) -> usize {
        self.matched_skills.len() + self.unmatched_skills.len()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchLabel {
    Strong,
    Moderate,
    Low,
}

impl MatchLabel {
    /// The strong cutoff is a strict greater-than: exactly 60.0 is Moderate.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 60.0 {
            MatchLabel::Strong
        } else if percentage >= 40.0 {
            MatchLabel::Moderate
        } else {
            MatchLabel::Low
        }
    }
}

impl std::fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLabel::Strong => write!(f, "Strong Match"),
            MatchLabel::Moderate => write!(f, "Moderate Match"),
            MatchLabel::Low => write!(f, "Low Match"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: MatchResult,
    pub label: MatchLabel,
    pub suggestions: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}
