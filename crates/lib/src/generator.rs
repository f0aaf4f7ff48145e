//! # Roadmap Generator
//!
//! The single shared generation path: build the prompt, make one completion
//! call, and fall back to the static template on any failure. The generator
//! is infallible from the caller's perspective; availability of a response is
//! prioritized over freshness of content.

use crate::fallback::fallback_roadmap;
use crate::prompts::{build_roadmap_prompt, ROADMAP_SYSTEM_PROMPT};
use crate::providers::ai::AiProvider;
use tracing::{info, warn};

/// The query used when a request carries none.
pub const DEFAULT_QUERY: &str = "web development";

/// Generates roadmap markdown, preferring the upstream completion API.
///
/// The provider is injected at construction; `None` means no credential is
/// configured and every request is served from the fallback template. No
/// retries, no caching, no state beyond the provider handle.
#[derive(Clone, Debug)]
pub struct RoadmapGenerator {
    provider: Option<Box<dyn AiProvider>>,
}

impl RoadmapGenerator {
    /// Creates a generator. Pass `None` to run in fallback-only mode.
    pub fn new(provider: Option<Box<dyn AiProvider>>) -> Self {
        Self { provider }
    }

    /// Whether an upstream provider is configured.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Produces roadmap markdown for `query`.
    ///
    /// Never returns an error: an unconfigured provider, a failed request, a
    /// non-success upstream status, or an empty completion all collapse to
    /// the deterministic fallback document.
    pub async fn generate(&self, query: &str) -> String {
        let Some(provider) = &self.provider else {
            info!("No completion provider configured; serving fallback roadmap.");
            return fallback_roadmap(query);
        };

        let user_prompt = build_roadmap_prompt(query);
        match provider.generate(ROADMAP_SYSTEM_PROMPT, &user_prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Completion API failed; serving fallback roadmap: {e}");
                fallback_roadmap(query)
            }
        }
    }
}

/// Resolves the effective query for a request.
///
/// A missing or empty query collapses to [`DEFAULT_QUERY`]; any other string
/// is accepted as-is.
pub fn effective_query(query: Option<&str>) -> &str {
    match query {
        Some(q) if !q.is_empty() => q,
        _ => DEFAULT_QUERY,
    }
}
