//! Clients for the hosted language models behind note summarization and
//! skill categorization.
//!
//! The API layer depends only on the [`Summarizer`] and
//! [`ZeroShotClassifier`] traits; [`HuggingFaceClient`] implements both
//! against the Hugging Face Inference API request/response shapes.

pub mod client;
pub mod error;
pub mod types;

use async_trait::async_trait;

pub use client::{HuggingFaceClient, InferenceConfig};
pub use error::InferenceError;
pub use types::Classification;

/// Abstractive summarization of free text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` to between `min_length` and `max_length` tokens.
    async fn summarize(
        &self,
        text: &str,
        max_length: u32,
        min_length: u32,
    ) -> Result<String, InferenceError>;
}

/// Zero-shot classification of text against caller-supplied labels.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    /// Score `text` against `labels`, returning the best label.
    async fn classify(
        &self,
        text: &str,
        labels: &[String],
    ) -> Result<Classification, InferenceError>;
}
