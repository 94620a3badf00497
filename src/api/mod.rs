//! Public API Layer
//!
//! Shared types consumed by both the conference module and host integrations.

pub mod types;

pub use types::{AccountId, LegId};
