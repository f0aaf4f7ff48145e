use thiserror::Error;

/// Custom error types for roadmap generation.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to completion API: {0}")]
    CompletionRequest(reqwest::Error),
    #[error("Failed to deserialize completion API response: {0}")]
    CompletionDeserialization(reqwest::Error),
    #[error("Completion API returned an error: {0}")]
    CompletionApi(String),
    #[error("Completion API returned no usable text")]
    EmptyCompletion,
}
