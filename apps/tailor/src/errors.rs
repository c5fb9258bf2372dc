use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every variant is fatal for the run; `main` logs it once and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{call} response is missing required field `{field}`")]
    MissingField {
        call: &'static str,
        field: &'static str,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Maps a client-level failure onto the run taxonomy, tagging it with the call that failed.
    pub fn from_llm(call: &'static str, err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => AppError::Json(e),
            LlmError::MissingField(field) => AppError::MissingField { call, field },
            other => AppError::Llm(format!("{call} failed: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_maps_to_named_error() {
        let err = AppError::from_llm("Job context extraction", LlmError::MissingField("keywords"));
        match err {
            AppError::MissingField { call, field } => {
                assert_eq!(call, "Job context extraction");
                assert_eq!(field, "keywords");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_maps_to_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = AppError::from_llm("Skill filtering", LlmError::Parse(parse_err));
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_api_error_maps_to_llm_with_call_name() {
        let err = AppError::from_llm(
            "Summary generation",
            LlmError::Api {
                status: 500,
                message: "boom".to_string(),
            },
        );
        let rendered = err.to_string();
        assert!(rendered.starts_with("LLM error: Summary generation failed"));
        assert!(rendered.contains("500"));
    }
}
