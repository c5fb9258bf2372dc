//! Job description fetcher — one unauthenticated GET against the posting URL.

use reqwest::Client;
use tracing::{error, info};

use crate::errors::AppError;

/// Fetches the job posting and returns the raw page body.
/// Non-2xx responses and transport failures are fatal; nothing is retried.
pub async fn fetch_job_description(client: &Client, url: &str) -> Result<String, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            error!("Failed to fetch job description: {e}");
            AppError::Fetch(e.to_string())
        })?;

    let body = response.text().await.map_err(|e| {
        error!("Failed to read job description body: {e}");
        AppError::Fetch(e.to_string())
    })?;

    info!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_page_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Rust Engineer</h1>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetch_job_description(&Client::new(), &format!("{}/jobs/42", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<h1>Rust Engineer</h1>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = fetch_job_description(&Client::new(), &format!("{}/gone", server.uri())).await;
        assert!(matches!(result, Err(AppError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_fatal() {
        let result = fetch_job_description(&Client::new(), "not a url").await;
        assert!(matches!(result, Err(AppError::Fetch(_))));
    }
}
