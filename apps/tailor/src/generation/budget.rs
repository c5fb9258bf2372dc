//! Word budget for the tailored experience section.
//!
//! A one-page resume holds roughly `DEFAULT_WORD_LIMIT` words. Whatever the summary,
//! skills, education and projects do not use is handed to the experience bullets,
//! clamped so the section is never too sparse nor too long.

use crate::models::profile::{Education, Project};

pub const DEFAULT_WORD_LIMIT: usize = 600;
pub const MIN_EXPERIENCE_WORDS: usize = 300;
pub const MAX_EXPERIENCE_WORDS: usize = 450;

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Words used by every section other than work experience.
pub fn non_experience_words(
    summary: &str,
    skills: &[String],
    education: &[Education],
    projects: &[Project],
) -> usize {
    let summary_words = word_count(summary);
    let skill_words = word_count(&skills.join(" "));
    let edu_words: usize = education
        .iter()
        .map(|e| word_count(&e.degree) + word_count(&e.school))
        .sum();
    let proj_words: usize = projects
        .iter()
        .map(|p| word_count(&p.title) + word_count(&p.description))
        .sum();

    summary_words + skill_words + edu_words + proj_words
}

/// Computes the experience word budget, always within
/// `[MIN_EXPERIENCE_WORDS, MAX_EXPERIENCE_WORDS]`.
pub fn compute_work_experience_budget(
    summary: &str,
    skills: &[String],
    education: &[Education],
    projects: &[Project],
    total_limit: usize,
) -> usize {
    let used = non_experience_words(summary, skills, education, projects);
    let remaining = total_limit as i64 - used as i64;
    remaining.clamp(MIN_EXPERIENCE_WORDS as i64, MAX_EXPERIENCE_WORDS as i64) as usize
}
