use skilltrack_inference::client::{
    DEFAULT_API_URL, DEFAULT_CLASSIFICATION_MODEL, DEFAULT_SUMMARIZATION_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
use skilltrack_inference::InferenceConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Hosted model settings for summarization and categorization.
    pub inference: InferenceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                 |
    /// |-------------------------|-----------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                               |
    /// | `PORT`                  | `8000`                                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                 |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                    |
    /// | `INFERENCE_API_URL`     | `https://api-inference.huggingface.co`  |
    /// | `INFERENCE_API_TOKEN`   | unset                                   |
    /// | `SUMMARIZATION_MODEL`   | `facebook/bart-large-cnn`               |
    /// | `CLASSIFICATION_MODEL`  | `facebook/bart-large-mnli`              |
    /// | `INFERENCE_TIMEOUT_SECS`| `60`                                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let inference = InferenceConfig {
            api_url: std::env::var("INFERENCE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.into()),
            api_token: std::env::var("INFERENCE_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            summarization_model: std::env::var("SUMMARIZATION_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUMMARIZATION_MODEL.into()),
            classification_model: std::env::var("CLASSIFICATION_MODEL")
                .unwrap_or_else(|_| DEFAULT_CLASSIFICATION_MODEL.into()),
            timeout_secs: std::env::var("INFERENCE_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .expect("INFERENCE_TIMEOUT_SECS must be a valid u64"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            inference,
        }
    }
}
