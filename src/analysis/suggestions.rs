use crate::models::MatchResult;

const MISSING_SKILL_ADVICE: [&str; 4] = [
    "Add the missing skills listed above if you have experience.",
    "Include measurable achievements related to these skills.",
    "Add a dedicated 'Technical Skills' section if not present.",
    "Use exact keywords from the job description.",
];

const ALIGNED_ADVICE: [&str; 3] = [
    "Your resume aligns well with the job description.",
    "Ensure achievements are quantified (numbers, impact).",
    "Keep formatting ATS-friendly (simple layout, no tables).",
];

const LOW_SCORE_ADVICE: [&str; 2] = [
    "Consider upskilling in the missing technologies.",
    "Customize resume summary according to job role.",
];

/// Canned improvement advice derived from the match outcome. A degenerate
/// result with no parsed skills gets no advice at all rather than the
/// "aligns well" lines it would otherwise trip into.
pub fn improvement_suggestions(result: &MatchResult) -> Vec<String> {
    if result.skill_count() == 0 {
        return Vec::new();
    }

    let base: &[&str] = if result.unmatched_skills.is_empty() {
        &ALIGNED_ADVICE
    } else {
        &MISSING_SKILL_ADVICE
    };

    let mut lines: Vec<String> = base.iter().map(|s| s.to_string()).collect();

    if result.match_percentage < 50.0 {
        lines.extend(LOW_SCORE_ADVICE.iter().map(|s| s.to_string()));
    }

    lines
}
