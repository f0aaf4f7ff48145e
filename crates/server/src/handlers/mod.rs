//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the
//! `roadmap-server`, split into `general` (root, health, fallbacks) and
//! `roadmap` (the generation endpoint).

pub mod general;
pub mod roadmap;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use general::*;
pub use roadmap::*;

// Shared items used by the handler modules.
use super::{errors::AppError, state::AppState};
