//! # API Route Handlers
//!
//! This module organizes the Axum route handlers for the `appraisal-server`.
//! The handlers are split into logical sub-modules based on their functionality.

pub mod catalog;
pub mod extract;
pub mod general;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use catalog::*;
pub use extract::*;
pub use general::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
