//! Resume tailoring — orchestrates the full pipeline for one job posting.
//!
//! Flow: load profile → job URL → fetch → extract job context → summary →
//!       skill selection → user approval → persist profile → word budget →
//!       tailor experience → format dates → assemble.
//!
//! Every step runs to completion before the next starts. The first error aborts the run;
//! the profile may already have been rewritten by then.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::fetcher::fetch_job_description;
use crate::generation::approval::approve_suggested_skills;
use crate::generation::budget::{compute_work_experience_budget, DEFAULT_WORD_LIMIT};
use crate::generation::experience::{format_job_dates, tailor_work_experience};
use crate::generation::jd_parser::extract_job_context;
use crate::generation::skills::{filter_and_suggest_skills, flatten_skills};
use crate::generation::summary::generate_summary;
use crate::llm_client::LlmClient;
use crate::models::profile::{load_profile, save_profile};
use crate::models::resume::{TailoredParts, TailoredResume};
use crate::settings::Settings;

/// Everything a run needs besides the console.
pub struct TailorContext<'a> {
    pub llm: &'a LlmClient,
    pub http: &'a reqwest::Client,
    pub settings: Settings,
    pub profile_path: &'a Path,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the tailoring pipeline and returns the assembled resume.
///
/// `job_url` skips the URL prompt when given. `input`/`output` carry the interactive
/// prompts (stdin/stdout in the binary).
pub async fn tailor_resume<R: BufRead, W: Write>(
    ctx: &TailorContext<'_>,
    job_url: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<TailoredResume, AppError> {
    // Step 1: Load profile
    info!("Loading resume data...");
    let mut document = load_profile(ctx.profile_path)?;

    // Step 2: Job URL
    let job_url = match job_url {
        Some(url) => url.trim().to_string(),
        None => prompt_line(input, output, "Enter the LinkedIn job URL: ")?,
    };

    // Step 3: Fetch
    info!("Fetching job description...");
    let page = fetch_job_description(ctx.http, &job_url).await?;

    // Step 4: Job context
    info!("Extracting responsibilities and keywords...");
    let job = extract_job_context(&page, ctx.llm).await?;
    info!(
        "Target role: {} at {}",
        job.target_job_title, job.target_company
    );

    // Step 5: Summary
    info!("Generating professional summary...");
    let summary = generate_summary(&document.profile.experience, &job, ctx.llm).await?;

    // Step 6: Skills
    info!("Filtering and suggesting skills...");
    let selection = filter_and_suggest_skills(&document.profile.skills, &job, ctx.llm).await?;
    let mut selected_skills = selection.selected_skills;

    // Step 7: Approval
    let mut known_skills = document.profile.skill_set();
    let accepted = approve_suggested_skills(
        &selection.suggested_skills,
        &mut selected_skills,
        &mut known_skills,
        input,
        output,
    )?;
    if !accepted.is_empty() {
        info!("Added {} suggested skill(s): {}", accepted.len(), accepted.join(", "));
    }

    // Step 8: Persist the flat skill list
    info!("Saving updated resume data...");
    document.set_skills(&known_skills);
    save_profile(ctx.profile_path, &document)?;

    let profile = document.profile;
    let projects = if ctx.settings.include_projects {
        profile.projects().to_vec()
    } else {
        Vec::new()
    };

    // Step 9: Word budget
    info!("Calculating work experience word budget...");
    let max_words = compute_work_experience_budget(
        &summary,
        &flatten_skills(&selected_skills),
        &profile.education,
        &projects,
        DEFAULT_WORD_LIMIT,
    );

    // Step 10: Tailor experience
    info!("Tailoring work experience to fit within {max_words} words...");
    let work_experience =
        tailor_work_experience(&profile.experience, &job, max_words, &ctx.settings, ctx.llm)
            .await?;

    // Step 11: Dates
    info!("Formatting job dates...");
    let work_experience = format_job_dates(work_experience);

    Ok(TailoredResume::assemble(
        &profile,
        TailoredParts {
            job,
            summary,
            skills: selected_skills,
            work_experience,
            projects,
        },
    ))
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
