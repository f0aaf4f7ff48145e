//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state holds the configuration and the one
//! shared `RoadmapGenerator`, making both accessible to all request handlers.

use crate::config::AppConfig;
use roadmap::providers::ai::{groq::GroqProvider, AiProvider};
use roadmap::RoadmapGenerator;
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The shared content generator consumed by every roadmap route.
    pub generator: Arc<RoadmapGenerator>,
}

/// Builds the shared application state from the configuration.
///
/// The completion provider is injected into the generator here, so handlers
/// and tests never read process environment themselves. An absent API key is
/// a valid state: the generator runs in fallback-only mode.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider: Option<Box<dyn AiProvider>> = match &config.provider.api_key {
        Some(api_key) => {
            info!(
                model = %config.provider.model_name,
                "Completion provider configured."
            );
            Some(Box::new(GroqProvider::new(
                config.provider.api_url.clone(),
                api_key.clone(),
                config.provider.model_name.clone(),
            )?))
        }
        None => {
            info!("No completion API key configured; serving fallback roadmaps only.");
            None
        }
    };

    Ok(AppState {
        config: Arc::new(config),
        generator: Arc::new(RoadmapGenerator::new(provider)),
    })
}
