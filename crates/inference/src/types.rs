//! Wire types for the Hugging Face Inference API.

use serde::{Deserialize, Serialize};

/// Generation parameters for the summarization pipeline.
#[derive(Debug, Serialize)]
pub struct SummarizationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

#[derive(Debug, Serialize)]
pub struct SummarizationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: SummarizationParameters,
}

/// One element of the summarization response array.
#[derive(Debug, Deserialize)]
pub struct SummarizationOutput {
    pub summary_text: String,
}

#[derive(Debug, Serialize)]
pub struct ZeroShotParameters<'a> {
    pub candidate_labels: &'a [String],
    pub multi_label: bool,
}

#[derive(Debug, Serialize)]
pub struct ZeroShotRequest<'a> {
    pub inputs: &'a str,
    pub parameters: ZeroShotParameters<'a>,
}

/// Zero-shot response: labels sorted by descending score.
#[derive(Debug, Deserialize)]
pub struct ZeroShotOutput {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

/// The winning label and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}
