//! Resume profile store: the candidate's static resume data, persisted as YAML.
//!
//! The document is kept twice: as the raw YAML mapping (so unknown keys survive a save)
//! and as a typed `ResumeProfile` view used by the pipeline. Only `skills` is ever rewritten.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::{error, info};

use crate::errors::AppError;

// Hand-written YAML often leaves numbers unquoted (`phone: 5550100`, `end_date: 2023`).
// These fields accept any scalar and keep its text.

fn scalar_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Tagged(tagged) => scalar_text(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("expected a string, number or boolean".to_string())
        }
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_text(value)
        .map(Option::unwrap_or_default)
        .map_err(serde::de::Error::custom)
}

fn optional_scalar_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_text(value).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "optional_scalar_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "optional_scalar_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "optional_scalar_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "optional_scalar_string")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "optional_scalar_string")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(deserialize_with = "scalar_string")]
    pub school: String,
    #[serde(deserialize_with = "scalar_string")]
    pub degree: String,
}

/// A job as written in the profile. Dates are free-form strings, normally `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub end_date: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Typed view of the profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub contact: Contact,
    /// Flat skill list. Categories are assigned per job by the skill selection call.
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
}

impl ResumeProfile {
    pub fn projects(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or_default()
    }

    /// The flat skill set, used for duplicate checks during approval.
    pub fn skill_set(&self) -> BTreeSet<String> {
        self.skills.iter().cloned().collect()
    }
}

/// A loaded profile document: the raw mapping plus its typed view.
#[derive(Debug, Clone)]
pub struct ProfileDocument {
    raw: Mapping,
    pub profile: ResumeProfile,
}

impl ProfileDocument {
    /// Parses a YAML profile. Any missing required key or type mismatch is fatal.
    pub fn from_yaml(yaml: &str) -> Result<Self, AppError> {
        let raw: Mapping = serde_yaml::from_str(yaml)
            .map_err(|e| AppError::Profile(format!("Failed to parse YAML file: {e}")))?;
        let profile: ResumeProfile = serde_yaml::from_value(Value::Mapping(raw.clone()))
            .map_err(|e| AppError::Profile(format!("Invalid resume profile: {e}")))?;
        Ok(Self { raw, profile })
    }

    /// Replaces the flat skill list in both views. The set is written sorted.
    pub fn set_skills(&mut self, skills: &BTreeSet<String>) {
        let sorted: Vec<String> = skills.iter().cloned().collect();
        self.raw.insert(
            Value::String("skills".to_string()),
            Value::Sequence(sorted.iter().cloned().map(Value::String).collect()),
        );
        self.profile.skills = sorted;
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(&self.raw)
            .map_err(|e| AppError::Profile(format!("Failed to serialize resume profile: {e}")))
    }
}

/// Loads the profile document from `path`. A missing file is fatal.
pub fn load_profile(path: &Path) -> Result<ProfileDocument, AppError> {
    let yaml = fs::read_to_string(path).map_err(|e| {
        error!("The file {} was not found or could not be read: {e}", path.display());
        AppError::Profile(format!("Failed to read {}: {e}", path.display()))
    })?;

    ProfileDocument::from_yaml(&yaml).inspect_err(|e| error!("{e}"))
}

/// Writes the profile document back to `path`.
pub fn save_profile(path: &Path, document: &ProfileDocument) -> Result<(), AppError> {
    let yaml = document.to_yaml()?;
    fs::write(path, yaml).map_err(|e| {
        error!("Failed to write {}: {e}", path.display());
        AppError::Io(e)
    })?;
    info!("Saved updated resume data to {}", path.display());
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_PROFILE: &str = r#"
name: Jane Doe
contact:
  email: jane@example.com
  phone: "555-0100"
  location: Boston, MA
  linkedin: linkedin.com/in/janedoe
  github: github.com/janedoe
skills:
  - SQL
  - Python
education:
  - school: MIT
    degree: BSc
experience:
  - title: Data Engineer
    company: Initech
    start_date: 2021-03
    end_date: Present
    bullets:
      - Built nightly ETL pipelines in Python
      - Cut warehouse costs by 30%
headline: Builder of data platforms
"#;

    #[test]
    fn test_profile_parses_required_sections() {
        let doc = ProfileDocument::from_yaml(SAMPLE_PROFILE).unwrap();
        let profile = &doc.profile;
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(profile.skills, vec!["SQL", "Python"]);
        assert_eq!(profile.education[0].school, "MIT");
        assert_eq!(profile.experience[0].start_date, "2021-03");
        assert!(profile.projects().is_empty());
    }

    #[test]
    fn test_unquoted_numbers_load_as_text() {
        let yaml = SAMPLE_PROFILE
            .replace("\"555-0100\"", "5550100")
            .replace("end_date: Present", "end_date: 2023");
        let doc = ProfileDocument::from_yaml(&yaml).unwrap();
        let profile = &doc.profile;
        assert_eq!(profile.contact.phone.as_deref(), Some("5550100"));
        assert_eq!(profile.experience[0].end_date, "2023");
        assert_eq!(profile.experience[0].start_date, "2021-03");
    }

    #[test]
    fn test_null_contact_field_is_none() {
        let yaml = SAMPLE_PROFILE.replace("  phone: \"555-0100\"", "  phone:");
        let doc = ProfileDocument::from_yaml(&yaml).unwrap();
        assert_eq!(doc.profile.contact.phone, None);
    }

    #[test]
    fn test_list_where_scalar_expected_is_fatal() {
        let yaml = SAMPLE_PROFILE.replace("end_date: Present", "end_date: [2023]");
        match ProfileDocument::from_yaml(&yaml) {
            Err(AppError::Profile(msg)) => assert!(msg.contains("expected a string"), "{msg}"),
            other => panic!("expected Profile error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_profile_is_fatal() {
        let result = ProfileDocument::from_yaml("name: [unclosed");
        assert!(matches!(result, Err(AppError::Profile(_))));
    }

    #[test]
    fn test_profile_missing_experience_is_fatal() {
        let yaml = "name: A\ncontact: {}\nskills: []\neducation: []\n";
        let result = ProfileDocument::from_yaml(yaml);
        match result {
            Err(AppError::Profile(msg)) => assert!(msg.contains("experience"), "{msg}"),
            other => panic!("expected Profile error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_profile_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_profile(&dir.path().join("resume.yaml"));
        assert!(matches!(result, Err(AppError::Profile(_))));
    }

    #[test]
    fn test_save_rewrites_only_skills_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.yaml");
        fs::write(&path, SAMPLE_PROFILE).unwrap();

        let mut doc = load_profile(&path).unwrap();
        let mut skills = doc.profile.skill_set();
        skills.insert("Airflow".to_string());
        doc.set_skills(&skills);
        save_profile(&path, &doc).unwrap();

        let reloaded = load_profile(&path).unwrap();
        assert_eq!(reloaded.profile.skills, vec!["Airflow", "Python", "SQL"]);
        assert_eq!(reloaded.profile.experience, doc.profile.experience);
        assert_eq!(reloaded.profile.contact, doc.profile.contact);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("headline: Builder of data platforms"));
    }
}
