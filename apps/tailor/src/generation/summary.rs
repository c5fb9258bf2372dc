//! Professional summary generation. The only call whose response is plain text.

use tracing::error;

use crate::errors::AppError;
use crate::generation::jd_parser::JobContext;
use crate::generation::prompts::SUMMARY_PROMPT_TEMPLATE;
use crate::llm_client::prompts::RESUME_WRITER_SYSTEM;
use crate::llm_client::{LlmClient, GENERATION_MODEL};
use crate::models::profile::Experience;

const CALL: &str = "Summary generation";

pub fn build_summary_prompt(experience: &[Experience], job: &JobContext) -> Result<String, AppError> {
    let experience_json = serde_json::to_string(experience)?;

    Ok(SUMMARY_PROMPT_TEMPLATE
        .replace("{role}", &job.target_job_title)
        .replace("{responsibilities}", &job.responsibilities_json()?)
        .replace("{keywords}", &job.keywords_json()?)
        .replace("{experience_json}", &experience_json))
}

/// Generates a 50–70 word summary from the profile's experience and the job context.
pub async fn generate_summary(
    experience: &[Experience],
    job: &JobContext,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = build_summary_prompt(experience, job)?;
    llm.call_text(&prompt, RESUME_WRITER_SYSTEM, GENERATION_MODEL)
        .await
        .map_err(|e| {
            error!("An error occurred while generating summary: {e}");
            AppError::from_llm(CALL, e)
        })
}
