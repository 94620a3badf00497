//! # conference-core - Multi-leg conference call management
//!
//! This crate models a conference call manager: an aggregate of independent
//! call connections ("legs") presented as a single call with unified
//! controls. It owns the decision logic only - leg selection, capability
//! derivation and operation dispatch - and delegates every actual call-state
//! operation to the legs themselves.
//!
//! ## Overview
//!
//! - [`conference::ConferenceManager`]: the per-conference decision engine
//! - [`conference::ConferenceControl`]: host-facing callback surface
//! - [`conference::leg`]: the leg, backing-connection and endpoint traits the
//!   host layer implements
//! - [`conference::events`]: observable conference events
//!
//! ## Quick Start
//!
//! ```rust
//! use conference_core::prelude::*;
//!
//! let conference = ConferenceManager::new(AccountId::new());
//!
//! // Every conference starts with the full capability set.
//! assert!(conference.capabilities().contains(Capability::ManageConference));
//! assert!(!conference.participants_received());
//! ```
//!
//! Legs join through [`conference::ConferenceControl::on_leg_added`]; the
//! conference tolerates a transient single-leg state (mid-separation) but is
//! created by the collaborator layer only once two or more calls merge.

#![warn(rust_2018_idioms)]

pub mod api;
pub mod conference;
pub mod errors;

// Re-export commonly used items for convenience
pub mod prelude {
    //! Convenience re-exports of the crate's main types.
    pub use crate::api::types::{AccountId, LegId};
    pub use crate::conference::api::ConferenceControl;
    pub use crate::conference::events::{ConferenceEvent, ConferenceEventHandler};
    pub use crate::conference::leg::{
        BackingConnection, CallEndpoint, ConferenceLeg, Leg, RadioLeg, SignalingCall,
    };
    pub use crate::conference::manager::ConferenceManager;
    pub use crate::conference::types::{Capability, ConferenceCapabilities, ConferenceState};
    pub use crate::errors::{ConferenceError, Result};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
