//! Experience tailoring — rewrites the profile's work-experience bullets for the target job
//! within the computed word budget.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::generation::jd_parser::JobContext;
use crate::generation::prompts::{
    CHRONOLOGICAL_ORDER_RULE, KEEP_ALL_JOBS_RULE, PRUNE_IRRELEVANT_RULE, RELEVANCE_ORDER_RULE,
    TAILOR_EXPERIENCE_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RESUME_WRITER_SYSTEM};
use crate::llm_client::{LlmClient, GENERATION_MODEL};
use crate::models::profile::Experience;
use crate::settings::Settings;

const CALL: &str = "Experience tailoring";

/// A job as returned by the tailoring call. Dates are reformatted before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredJob {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TailoringResponse {
    work_experience: Vec<TailoredJob>,
}

/// Builds the tailoring prompt. The two settings flags pick one rule each.
pub fn build_tailoring_prompt(
    experience: &[Experience],
    job: &JobContext,
    max_words: usize,
    settings: &Settings,
) -> Result<String, AppError> {
    let prune_rule = if settings.prune_irrelevant {
        PRUNE_IRRELEVANT_RULE
    } else {
        KEEP_ALL_JOBS_RULE
    };
    let ordering_rule = if settings.prioritize_relevance {
        RELEVANCE_ORDER_RULE
    } else {
        CHRONOLOGICAL_ORDER_RULE
    };

    Ok(TAILOR_EXPERIENCE_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{prune_rule}", prune_rule)
        .replace("{ordering_rule}", ordering_rule)
        .replace("{max_words}", &max_words.to_string())
        .replace("{role}", &job.target_job_title)
        .replace("{company}", &job.target_company)
        .replace("{keywords}", &job.keywords_json()?)
        .replace("{responsibilities}", &job.responsibilities_json()?)
        .replace("{job_summary}", &job.job_summary)
        .replace("{experience_json}", &serde_json::to_string(experience)?))
}

/// Sends the profile's experience to the LLM and returns the tailored jobs.
pub async fn tailor_work_experience(
    experience: &[Experience],
    job: &JobContext,
    max_words: usize,
    settings: &Settings,
    llm: &LlmClient,
) -> Result<Vec<TailoredJob>, AppError> {
    let prompt = build_tailoring_prompt(experience, job, max_words, settings)?;
    let response: TailoringResponse = llm
        .call_schema(&prompt, RESUME_WRITER_SYSTEM, GENERATION_MODEL, &["work_experience"])
        .await
        .map_err(|e| {
            error!("An error occurred while tailoring work experience: {e}");
            AppError::from_llm(CALL, e)
        })?;

    Ok(response.work_experience)
}

/// Formats `YYYY-MM` as `Mon. YYYY`. Anything else ("Present", "") passes through.
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b. %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn format_job_dates(jobs: Vec<TailoredJob>) -> Vec<TailoredJob> {
    jobs.into_iter()
        .map(|job| TailoredJob {
            start_date: format_date(&job.start_date),
            end_date: format_date(&job.end_date),
            ..job
        })
        .collect()
}
