use crate::{errors::GeneratorError, providers::ai::AiProvider};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Sampling temperature for roadmap generation.
const TEMPERATURE: f32 = 0.7;
/// Token ceiling; a full four-phase roadmap fits well within this.
const MAX_TOKENS: i32 = 3000;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- Groq Provider implementation ---

/// A provider for the Groq chat-completion API.
///
/// The wire schema is the standard OpenAI-compatible one, so this client also
/// works against any endpoint exposing `choices[0].message.content`.
#[derive(Clone, Debug)]
pub struct GroqProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl GroqProvider {
    /// Creates a new `GroqProvider`.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, GeneratorError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(GeneratorError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// The model identifier sent with every completion request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AiProvider for GroqProvider {
    /// Generates roadmap text via a single chat-completion call.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GeneratorError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(GeneratorError::CompletionRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::CompletionApi(error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(GeneratorError::CompletionDeserialization)?;

        let text = completion
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeneratorError::EmptyCompletion);
        }

        Ok(text)
    }
}
