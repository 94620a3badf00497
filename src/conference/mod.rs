//! Conference Management Module
//!
//! Models a multi-leg conference call: several independent call connections
//! presented as one logical call with unified controls. The module tracks
//! capability flags derived from the conference's composition and signaling
//! history, selects a representative leg for UI/status purposes, and
//! dispatches conference-level operations (merge, separate, hold/unhold,
//! DTMF, disconnect) onto the correct underlying leg(s).
//!
//! The host call-control layer drives a [`ConferenceManager`] through the
//! [`ConferenceControl`] callbacks and observes capability and composition
//! changes through [`ConferenceEventHandler`]s.

pub mod api;
pub mod events;
pub mod leg;
pub mod manager;
pub mod types;

pub use api::ConferenceControl;
pub use events::{ConferenceEvent, ConferenceEventHandler};
pub use leg::{BackingConnection, CallEndpoint, ConferenceLeg, Leg, RadioLeg, SignalingCall};
pub use manager::ConferenceManager;
pub use types::{Capability, ConferenceCapabilities, ConferenceState};
