use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::{error, warn};

use crate::errors::AppError;

/// Feature flags read from `settings.yaml`.
/// Passed explicitly to every step that branches on a flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Allow the tailoring call to drop clearly unrelated jobs.
    pub prune_irrelevant: bool,
    /// Order tailored experience by relevance instead of chronology.
    pub prioritize_relevance: bool,
    /// Include the profile's projects section in the resume.
    pub include_projects: bool,
}

impl Settings {
    /// Loads settings from `path`.
    ///
    /// A missing file or malformed YAML falls back to the defaults (all flags off).
    /// Any other read failure (permissions, a directory at `path`) is fatal.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(yaml) => Ok(Self::from_yaml(&yaml)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "The settings file {} was not found. Using defaults.",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(e) => {
                error!("Failed to read settings file {}: {e}", path.display());
                Err(AppError::Settings(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        }
    }

    /// Parses settings YAML. Each flag is read on its own: an unrecognized value only
    /// resets that flag. A document that does not parse at all yields the defaults.
    pub fn from_yaml(yaml: &str) -> Self {
        let mapping = match serde_yaml::from_str::<Option<Value>>(yaml) {
            Ok(Some(Value::Mapping(mapping))) => mapping,
            Ok(None) | Ok(Some(Value::Null)) => return Self::default(),
            Ok(Some(_)) => {
                error!("Settings YAML is not a mapping of flags. Using defaults.");
                return Self::default();
            }
            Err(e) => {
                error!("Failed to parse settings YAML: {e}. Using defaults.");
                return Self::default();
            }
        };

        Settings {
            prune_irrelevant: read_flag(&mapping, "prune_irrelevant"),
            prioritize_relevance: read_flag(&mapping, "prioritize_relevance"),
            include_projects: read_flag(&mapping, "include_projects"),
        }
    }
}

fn read_flag(mapping: &Mapping, key: &str) -> bool {
    match mapping.get(key) {
        None | Some(Value::Null) => false,
        Some(value) => parse_flag(value).unwrap_or_else(|| {
            warn!("Unrecognized value for setting '{key}': {value:?}. Using false.");
            false
        }),
    }
}

/// YAML booleans plus the YAML 1.1 spellings (`yes`/`no`/`on`/`off`) that 1.2 reads as strings.
fn parse_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "on" => Some(true),
            "false" | "no" | "n" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
