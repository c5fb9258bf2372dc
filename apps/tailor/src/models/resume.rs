use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::experience::TailoredJob;
use crate::generation::jd_parser::JobContext;
use crate::generation::skills::SkillMap;
use crate::models::profile::{Project, ResumeProfile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationLine {
    pub institution: String,
    pub degree: String,
}

/// The fully assembled resume: the JSON snapshot and the template's render context.
/// Built once at the end of a run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub name: String,
    /// Target job title, shown under the name.
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub education: Vec<EducationLine>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub summary: String,
    pub skills: SkillMap,
    pub work_experience: Vec<TailoredJob>,
    pub target_company: String,
    pub target_job_title: String,
}

/// Everything the pipeline produced for one job, ready to be merged with the profile.
pub struct TailoredParts {
    pub job: JobContext,
    pub summary: String,
    pub skills: SkillMap,
    pub work_experience: Vec<TailoredJob>,
    pub projects: Vec<Project>,
}

impl TailoredResume {
    pub fn assemble(profile: &ResumeProfile, parts: TailoredParts) -> Self {
        let TailoredParts {
            job,
            summary,
            skills,
            work_experience,
            projects,
        } = parts;
        let contact = profile.contact.clone();

        Self {
            name: profile.name.clone(),
            title: job.target_job_title.clone(),
            email: contact.email,
            phone: contact.phone,
            location: contact.location,
            linkedin: contact.linkedin,
            github: contact.github,
            education: profile
                .education
                .iter()
                .map(|e| EducationLine {
                    institution: e.school.clone(),
                    degree: e.degree.clone(),
                })
                .collect(),
            projects,
            summary,
            skills,
            work_experience,
            target_company: job.target_company,
            target_job_title: job.target_job_title,
        }
    }

    /// Writes the pretty-printed JSON snapshot used by preview mode.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| {
            error!("Failed to write resume snapshot {}: {e}", path.display());
            AppError::Io(e)
        })?;
        info!("Wrote resume snapshot to {}", path.display());
        Ok(())
    }

    pub fn load_snapshot(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read resume snapshot {}: {e}", path.display());
            AppError::Io(e)
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}
