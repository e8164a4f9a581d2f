use super::types::{MenuAnalysis, WirePreferences};
use super::validate::parse_analysis;
use crate::error::AnalysisError;
use reqwest::Client;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

/// Upload field constants of the analyze endpoint. The service always
/// receives the image as `menu.jpg`, whatever the local file was called.
const IMAGE_FIELD: &str = "image";
const IMAGE_FILENAME: &str = "menu.jpg";
const IMAGE_MIME: &str = "image/jpeg";
const PREFERENCES_FIELD: &str = "preferences";

/// Client for the remote menu-analysis service.
pub struct AnalysisClient {
    base_url: String,
    client: Client,
}

impl AnalysisClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .connect_timeout(Duration::from_secs(10))
                .pool_max_idle_per_host(10)
                .pool_idle_timeout(Duration::from_secs(90))
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the image bytes and the JSON-serialized preferences as a
    /// multipart form and validate the response into a `MenuAnalysis`.
    ///
    /// A non-success status yields `AnalysisError::Server` carrying the
    /// status code and the server's body text verbatim.
    pub async fn analyze_menu(
        &self,
        image: &[u8],
        preferences: &WirePreferences,
    ) -> Result<MenuAnalysis, AnalysisError> {
        let url = format!("{}/api/analyze-menu", self.base_url);
        debug!(%url, image_bytes = image.len(), "requesting menu analysis");

        let image_part = Part::bytes(image.to_vec())
            .file_name(IMAGE_FILENAME)
            .mime_str(IMAGE_MIME)?;
        let form = Form::new()
            .part(IMAGE_FIELD, image_part)
            .text(PREFERENCES_FIELD, serde_json::to_string(preferences)?);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|error| format!("<failed to read response body: {error}>"));
            return Err(AnalysisError::Server { status, body });
        }

        let body = response.text().await?;
        parse_analysis(&body)
    }
}
