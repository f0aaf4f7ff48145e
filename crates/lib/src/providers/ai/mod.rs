pub mod groq;

use crate::errors::GeneratorError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for generating roadmap text from a
/// system and user prompt, so the generator can be handed any completion
/// backend (the real Groq client, or a test double).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result should be a string containing the AI's response.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, GeneratorError>;
}

dyn_clone::clone_trait_object!(AiProvider);
