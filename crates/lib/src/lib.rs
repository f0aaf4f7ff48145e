//! # Roadmap Generation
//!
//! This crate produces markdown "learning roadmap" documents for a free-text
//! skill query. Generation prefers a configurable AI provider (an
//! OpenAI-compatible chat-completion API) and degrades to a deterministic,
//! network-independent fallback template whenever the upstream is
//! unconfigured, unreachable, or returns nothing usable.

pub mod errors;
pub mod fallback;
pub mod generator;
pub mod prompts;
pub mod providers;

pub use errors::GeneratorError;
pub use fallback::fallback_roadmap;
pub use generator::{effective_query, RoadmapGenerator, DEFAULT_QUERY};
