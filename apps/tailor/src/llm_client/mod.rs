//! LLM Client — the single point of entry for all chat-completion calls in the tailor.
//!
//! ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
//! All LLM interactions MUST go through this module.
//!
//! Models and temperature are hardcoded per call site (see the constants below).
//! No retries: a failed call aborts the run.

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Cheap model used for job-context extraction.
pub const EXTRACTION_MODEL: &str = "gpt-4o-mini";
/// Model used for tailoring, summary and skill selection.
pub const GENERATION_MODEL: &str = "gpt-4o";
pub const TEMPERATURE: f64 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content from the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The single LLM client used by every generation step.
/// Wraps the chat-completions API with fence stripping and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Makes a raw call to the chat-completions endpoint, returning the full response object.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        model: &str,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }

    /// Calls the LLM and returns its text with code fences removed.
    pub async fn call_text(
        &self,
        prompt: &str,
        system: &str,
        model: &str,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, system, model).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(strip_json_fences(text))
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        model: &str,
    ) -> Result<T, LlmError> {
        let text = self.call_text(prompt, system, model).await?;
        serde_json::from_str(&text).map_err(LlmError::Parse)
    }

    /// Like [`LlmClient::call_json`], but first checks that every `required` top-level key
    /// is present so a malformed response fails with the name of the missing field.
    pub async fn call_schema<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        model: &str,
        required: &[&'static str],
    ) -> Result<T, LlmError> {
        let value: serde_json::Value = self.call_json(prompt, system, model).await?;
        decode_with_required(value, required)
    }
}

/// Checks `required` keys on a JSON object, then deserializes it into `T`.
pub fn decode_with_required<T: DeserializeOwned>(
    value: serde_json::Value,
    required: &[&'static str],
) -> Result<T, LlmError> {
    for &field in required {
        if value.get(field).map_or(true, serde_json::Value::is_null) {
            return Err(LlmError::MissingField(field));
        }
    }
    serde_json::from_value(value).map_err(LlmError::Parse)
}

/// Removes fence lines (```` ``` ````, ```` ```json ````) and a bare `json` tag line from LLM output.
/// Applying it to already clean text is a no-op.
pub fn strip_json_fences(text: &str) -> String {
    text.trim()
        .lines()
        .filter(|line| {
            let line = line.trim().to_lowercase();
            !line.starts_with("```") && line != "json"
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
