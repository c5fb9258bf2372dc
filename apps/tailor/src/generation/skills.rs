//! Skill selection — asks the LLM which profile skills fit the job, grouped into
//! categories, and which new skills it would suggest adding.
//!
//! The prompt asks for suggestions that are new and filed under existing categories.
//! That contract is checked after parsing: duplicate suggestions are dropped, unknown
//! categories are kept (the approval loop creates them) but logged.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::errors::AppError;
use crate::generation::jd_parser::JobContext;
use crate::generation::prompts::SKILLS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, RESUME_WRITER_SYSTEM};
use crate::llm_client::{LlmClient, GENERATION_MODEL};

const CALL: &str = "Skill filtering";

/// Category name → skills, in the order the model returned them.
pub type SkillMap = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSelection {
    pub selected_skills: SkillMap,
    #[serde(default)]
    pub suggested_skills: SkillMap,
}

/// Flattens a category map into one list, preserving category and item order.
pub fn flatten_skills(skills: &SkillMap) -> Vec<String> {
    skills.values().flatten().cloned().collect()
}

pub fn build_skills_prompt(existing_skills: &[String], job: &JobContext) -> Result<String, AppError> {
    Ok(SKILLS_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{responsibilities}", &job.responsibilities_json()?)
        .replace("{keywords}", &job.keywords_json()?)
        .replace("{existing_skills}", &serde_json::to_string(existing_skills)?)
        .replace("{job_summary}", &job.job_summary))
}

/// Drops suggestions that duplicate a profile skill, a selected skill, or an earlier
/// suggestion (case-insensitive). Empty categories are removed.
pub fn repair_suggestions(selection: SkillSelection, existing_skills: &[String]) -> SkillSelection {
    let SkillSelection {
        selected_skills,
        suggested_skills,
    } = selection;

    let mut seen: HashSet<String> = existing_skills
        .iter()
        .chain(selected_skills.values().flatten())
        .map(|s| s.to_lowercase())
        .collect();

    let mut repaired = SkillMap::new();
    for (category, items) in suggested_skills {
        if !selected_skills.contains_key(&category) {
            warn!("Suggested category '{category}' is not among the selected categories");
        }
        let kept: Vec<String> = items
            .into_iter()
            .filter(|skill| {
                let fresh = seen.insert(skill.to_lowercase());
                if !fresh {
                    warn!("Dropping suggested skill '{skill}': already present");
                }
                fresh
            })
            .collect();
        if !kept.is_empty() {
            repaired.insert(category, kept);
        }
    }

    SkillSelection {
        selected_skills,
        suggested_skills: repaired,
    }
}

/// Filters the profile's skills for this job and collects suggestions.
pub async fn filter_and_suggest_skills(
    existing_skills: &[String],
    job: &JobContext,
    llm: &LlmClient,
) -> Result<SkillSelection, AppError> {
    let prompt = build_skills_prompt(existing_skills, job)?;
    let selection: SkillSelection = llm
        .call_schema(&prompt, RESUME_WRITER_SYSTEM, GENERATION_MODEL, &["selected_skills"])
        .await
        .map_err(|e| {
            error!("An error occurred while filtering and suggesting skills: {e}");
            AppError::from_llm(CALL, e)
        })?;

    Ok(repair_suggestions(selection, existing_skills))
}
