use serde::{Deserialize, Serialize};

/// The request body for the roadmap endpoints. The whole body is optional.
#[derive(Debug, Deserialize, Default)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// A single entry in `agent_insights`.
///
/// The public response shape describes a "multi-agent" pipeline, but exactly
/// one synthetic agent is reported regardless of how the roadmap was
/// produced. The shape is preserved for client compatibility; no real
/// multi-agent semantics exist behind it.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentInsight {
    pub agent_name: String,
    pub contribution: String,
    pub confidence: f32,
}

/// Request-scoped metadata echoed back with every roadmap.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoadmapMetadata {
    pub query: String,
    pub num_agents: u32,
    pub successful_agents: u32,
    pub agents_used: Vec<String>,
}

/// The response envelope for the roadmap endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub final_roadmap: String,
    pub agent_insights: Vec<AgentInsight>,
    pub metadata: RoadmapMetadata,
}

/// The response body for the `/health` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub groq_available: bool,
    pub model: String,
    pub timestamp: String,
}
