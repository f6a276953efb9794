/// Errors from the inference layer.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model service returned a non-2xx status code.
    #[error("Inference API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but did not contain a usable result.
    #[error("Unexpected inference response: {0}")]
    InvalidResponse(String),

    /// The caller supplied input the model cannot act on.
    #[error("Invalid inference input: {0}")]
    InvalidInput(String),
}
