//! REST client for hosted model inference.
//!
//! Wraps `POST {base}/models/{model}` for the summarization and zero-shot
//! classification pipelines using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use skilltrack_core::categorization::top_label;

use crate::error::InferenceError;
use crate::types::{
    Classification, SummarizationOutput, SummarizationParameters, SummarizationRequest,
    ZeroShotOutput, ZeroShotParameters, ZeroShotRequest,
};
use crate::{Summarizer, ZeroShotClassifier};

pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_CLASSIFICATION_MODEL: &str = "facebook/bart-large-mnli";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the inference service.
#[derive(Clone)]
pub struct InferenceConfig {
    /// Base URL, e.g. `https://api-inference.huggingface.co`.
    pub api_url: String,
    /// Optional bearer token.
    pub api_token: Option<String>,
    pub summarization_model: String,
    pub classification_model: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "***"))
            .field("summarization_model", &self.summarization_model)
            .field("classification_model", &self.classification_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            summarization_model: DEFAULT_SUMMARIZATION_MODEL.to_string(),
            classification_model: DEFAULT_CLASSIFICATION_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP client implementing [`Summarizer`] and [`ZeroShotClassifier`].
pub struct HuggingFaceClient {
    client: reqwest::Client,
    config: InferenceConfig,
}

impl HuggingFaceClient {
    /// Build a client with the configured request timeout.
    pub fn new(mut config: InferenceConfig) -> Result<Self, InferenceError> {
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.config.api_url, model)
    }

    async fn post<B, T>(&self, model: &str, body: &B) -> Result<T, InferenceError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.client.post(self.model_url(model)).json(body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, capturing the body
    /// text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, InferenceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(InferenceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, InferenceError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Summarizer for HuggingFaceClient {
    async fn summarize(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<String, InferenceError> {
        let body = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length,
                min_length,
                do_sample: false,
            },
        };

        tracing::debug!(model = %self.config.summarization_model, "Requesting summary");
        let outputs: Vec<SummarizationOutput> =
            self.post(&self.config.summarization_model, &body).await?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| InferenceError::InvalidResponse("empty summarization result".into()))
    }
}

#[async_trait]
impl ZeroShotClassifier for HuggingFaceClient {
    async fn classify(
        &self,
        text: &str,
        labels: &[String],
    ) -> Result<Classification, InferenceError> {
        if labels.is_empty() {
            return Err(InferenceError::InvalidInput(
                "at least one candidate label is required".into(),
            ));
        }

        let body = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: labels,
                multi_label: false,
            },
        };

        tracing::debug!(
            model = %self.config.classification_model,
            labels = labels.len(),
            "Requesting zero-shot classification"
        );
        let output: ZeroShotOutput = self.post(&self.config.classification_model, &body).await?;

        top_label(&output.labels, &output.scores)
            .map(|(label, score)| Classification { label, score })
            .ok_or_else(|| {
                InferenceError::InvalidResponse(format!(
                    "{} labels and {} scores",
                    output.labels.len(),
                    output.scores.len()
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
