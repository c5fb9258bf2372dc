use crate::errors::AppError;
use crate::llm_client::DEFAULT_OPENAI_BASE_URL;

/// Process configuration loaded from environment variables (and `.env` if present).
/// Paths and run mode come from the command line instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Only required when the pipeline calls the LLM; preview mode runs without it.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub rust_log: String,
    /// Launch Chrome with `--no-sandbox`; needed when running as root, as in most containers.
    pub chrome_no_sandbox: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            chrome_no_sandbox: env_flag(std::env::var("TAILOR_CHROME_NO_SANDBOX").ok().as_deref()),
        }
    }

    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.openai_api_key.as_deref().ok_or_else(|| {
            AppError::Config("Required environment variable 'OPENAI_API_KEY' is not set".to_string())
        })
    }
}

fn env_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>) -> Config {
        Config {
            openai_api_key: key.map(str::to_string),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            rust_log: "info".to_string(),
            chrome_no_sandbox: false,
        }
    }

    #[test]
    fn test_require_api_key_present() {
        assert_eq!(config(Some("sk-abc")).require_api_key().unwrap(), "sk-abc");
    }

    #[test]
    fn test_require_api_key_missing_names_variable() {
        let err = config(None).require_api_key().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_env_flag() {
        assert!(env_flag(Some("1")));
        assert!(env_flag(Some(" TRUE ")));
        assert!(env_flag(Some("yes")));
        assert!(!env_flag(Some("0")));
        assert!(!env_flag(Some("")));
        assert!(!env_flag(None));
    }
}
