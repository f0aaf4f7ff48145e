//! # Roadmap Route Handlers
//!
//! The generation endpoint: resolve the effective query, run the shared
//! generator, and wrap the markdown in the response envelope.

use super::{AppError, AppState};
use crate::types::{AgentInsight, RoadmapMetadata, RoadmapRequest, RoadmapResponse};
use axum::{extract::State, Json};
use roadmap::effective_query;
use tracing::info;

/// Name of the single synthetic agent reported in every envelope.
const AGENT_NAME: &str = "career_roadmap_advisor";

/// The handler for the roadmap endpoints (`/roadmap` and its aliases).
///
/// The body is optional; a missing or empty `query` defaults to
/// "web development". The generator never fails, so the only error path left
/// is envelope construction itself.
pub async fn roadmap_handler(
    State(app_state): State<AppState>,
    payload: Option<Json<RoadmapRequest>>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let request = payload.map(|Json(p)| p).unwrap_or_default();
    let query = effective_query(request.query.as_deref()).to_string();
    info!("Received roadmap request for query: '{query}'");

    let final_roadmap = app_state.generator.generate(&query).await;

    Ok(Json(RoadmapResponse {
        final_roadmap,
        agent_insights: vec![AgentInsight {
            agent_name: AGENT_NAME.to_string(),
            contribution: format!("Synthesized a phased learning roadmap for '{query}'."),
            confidence: 0.9,
        }],
        metadata: RoadmapMetadata {
            query,
            num_agents: 1,
            successful_agents: 1,
            agents_used: vec![AGENT_NAME.to_string()],
        },
    }))
}
