//! JD Parser — extracts the job context (title, company, keywords, responsibilities, summary)
//! from the raw text of a job posting.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::generation::prompts::JOB_CONTEXT_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RESUME_WRITER_SYSTEM};
use crate::llm_client::{LlmClient, EXTRACTION_MODEL};

const CALL: &str = "Job context extraction";

/// Keys the extraction response must carry. Absence aborts the run.
pub const JOB_CONTEXT_FIELDS: &[&str] = &[
    "responsibilities",
    "keywords",
    "target_job_title",
    "target_company",
    "job_summary",
];

/// Structured summary of the target job. Produced once per run and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobContext {
    /// Up to 3 key responsibilities.
    pub responsibilities: Vec<String>,
    /// Up to 20 named skills, technologies and keywords.
    pub keywords: Vec<String>,
    pub target_job_title: String,
    pub target_company: String,
    pub job_summary: String,
}

impl JobContext {
    pub fn keywords_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.keywords)?)
    }

    pub fn responsibilities_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&self.responsibilities)?)
    }
}

pub fn build_job_context_prompt(job_description: &str) -> String {
    JOB_CONTEXT_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{job_description}", job_description)
}

/// Sends the fetched page text to the LLM and returns a validated `JobContext`.
pub async fn extract_job_context(
    job_description: &str,
    llm: &LlmClient,
) -> Result<JobContext, AppError> {
    let prompt = build_job_context_prompt(job_description);
    llm.call_schema::<JobContext>(&prompt, RESUME_WRITER_SYSTEM, EXTRACTION_MODEL, JOB_CONTEXT_FIELDS)
        .await
        .map_err(|e| {
            error!("An error occurred while extracting responsibilities: {e}");
            AppError::from_llm(CALL, e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::decode_with_required;

    const FULL_RESPONSE: &str = r#"{
        "responsibilities": ["Design pipelines", "Own data quality", "Mentor engineers"],
        "keywords": ["Airflow", "dbt", "Snowflake"],
        "target_job_title": "Senior Data Engineer",
        "target_company": "Acme",
        "job_summary": "Acme is hiring a senior data engineer to scale analytics."
    }"#;

    #[test]
    fn test_prompt_embeds_page_text_and_json_contract() {
        let prompt = build_job_context_prompt("We are hiring a Rust engineer at Initech.");
        assert!(prompt.contains("We are hiring a Rust engineer at Initech."));
        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.contains("\"target_company\": \"Company Name\""));
        assert!(!prompt.contains("{json_only}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_prompt_keeps_braces_in_page_text() {
        let prompt = build_job_context_prompt("function() { return {json_only}; }");
        assert!(prompt.ends_with("function() { return {json_only}; }"));
    }

    #[test]
    fn test_job_context_full_deserializes_correctly() {
        let value: serde_json::Value = serde_json::from_str(FULL_RESPONSE).unwrap();
        let job: JobContext = decode_with_required(value, JOB_CONTEXT_FIELDS).unwrap();
        assert_eq!(job.target_job_title, "Senior Data Engineer");
        assert_eq!(job.target_company, "Acme");
        assert_eq!(job.responsibilities.len(), 3);
        assert_eq!(job.keywords[1], "dbt");
    }

    #[test]
    fn test_missing_company_is_named_error() {
        let mut value: serde_json::Value = serde_json::from_str(FULL_RESPONSE).unwrap();
        value.as_object_mut().unwrap().remove("target_company");
        let err = decode_with_required::<JobContext>(value, JOB_CONTEXT_FIELDS).unwrap_err();
        match AppError::from_llm(CALL, err) {
            AppError::MissingField { call, field } => {
                assert_eq!(call, CALL);
                assert_eq!(field, "target_company");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_keywords_json_is_a_json_array() {
        let value: serde_json::Value = serde_json::from_str(FULL_RESPONSE).unwrap();
        let job: JobContext = decode_with_required(value, JOB_CONTEXT_FIELDS).unwrap();
        assert_eq!(job.keywords_json().unwrap(), r#"["Airflow","dbt","Snowflake"]"#);
    }
}
