use std::collections::HashSet;

use rapidfuzz::fuzz;

use crate::analysis::normalizer::normalize;
use crate::models::MatchResult;

pub struct SkillMatcher {
    fuzzy_threshold: f64,
}

impl SkillMatcher {
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self { fuzzy_threshold }
    }

    /// Splits a comma-separated skill string into normalized entries.
    /// Order is preserved and duplicates are kept: a skill supplied twice
    /// is scored twice.
    pub fn parse_skills(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(|piece| normalize(piece.trim()))
            .filter(|skill| !skill.is_empty())
            .collect()
    }

    /// Classifies every requested skill against the normalized resume text.
    /// An empty skill list yields an empty partition with a 0.0 percentage.
    pub fn match_skills(&self, resume_text: &str, raw_skill_input: &str) -> MatchResult {
        let skills = Self::parse_skills(raw_skill_input);

        let mut matched_skills = Vec::new();
        let mut unmatched_skills = Vec::new();

        for skill in &skills {
            if self.is_match(resume_text, skill) {
                matched_skills.push(skill.clone());
            } else {
                unmatched_skills.push(skill.clone());
            }
        }

        let match_percentage = if skills.is_empty() {
            0.0
        } else {
            matched_skills.len() as f64 * 100.0 / skills.len() as f64
        };

        tracing::debug!(
            matched = matched_skills.len(),
            total = skills.len(),
            "skill matching complete"
        );

        MatchResult {
            matched_skills,
            unmatched_skills,
            match_percentage,
        }
    }

    fn is_match(&self, resume_text: &str, skill: &str) -> bool {
        if resume_text.contains(skill) {
            return true;
        }

        // Fall back to fuzzy alignment against sentence-like chunks. The
        // split on '.' is deliberately naive and mirrors the scoring the
        // rest of the report is calibrated against.
        resume_text
            .split('.')
            .any(|chunk| partial_ratio(skill, chunk) > self.fuzzy_threshold)
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(85.0)
    }
}

/// Alignment-based substring similarity on the 0-100 scale: the best
/// `fuzz::ratio` of the shorter string against the alignment windows of
/// the longer one, the scan RapidFuzz documents for `partial_ratio`.
/// Windows are the full-needle-length slices plus the shorter overlaps at
/// either end; a window is skipped when its edge character never occurs
/// in the needle.
fn partial_ratio(s1: &str, s2: &str) -> f64 {
    let mut needle: Vec<char> = s1.chars().collect();
    let mut haystack: Vec<char> = s2.chars().collect();
    if needle.len() > haystack.len() {
        std::mem::swap(&mut needle, &mut haystack);
    }
    if needle.is_empty() {
        return if haystack.is_empty() { 100.0 } else { 0.0 };
    }

    let len1 = needle.len();
    let len2 = haystack.len();
    let charset: HashSet<char> = needle.iter().copied().collect();
    let mut best = 0.0_f64;

    // Overlaps at the front, growing toward the needle length.
    for i in 1..len1 {
        if charset.contains(&haystack[i - 1]) {
            best = best.max(window_ratio(&needle, &haystack[..i]));
        }
    }

    // Full-length windows.
    for i in 0..len2 - len1 {
        if charset.contains(&haystack[i + len1 - 1]) {
            best = best.max(window_ratio(&needle, &haystack[i..i + len1]));
        }
    }

    // Overlaps at the back, shrinking to a single character.
    for i in len2 - len1..len2 {
        if charset.contains(&haystack[i]) {
            best = best.max(window_ratio(&needle, &haystack[i..]));
        }
    }

    best
}

fn window_ratio(needle: &[char], window: &[char]) -> f64 {
    // rapidfuzz reports similarity on a 0-1 scale; this module works on 0-100.
    fuzz::ratio(needle.iter().copied(), window.iter().copied()) * 100.0
}
