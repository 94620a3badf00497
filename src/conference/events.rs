//! Conference Events
//!
//! Events published to registered handlers whenever the conference
//! composition, capability set or lifecycle state changes. Handlers are
//! registered by unique name on the manager, mirroring how the rest of the
//! host layer consumes state-change notifications.

use std::time::Instant;

use async_trait::async_trait;

use crate::api::types::LegId;

use super::types::{ConferenceCapabilities, ConferenceState};

/// Observable conference-level events
#[derive(Debug, Clone)]
pub enum ConferenceEvent {
    /// A leg joined the conference
    LegAdded {
        leg_id: LegId,
        joined_at: Instant,
    },
    /// A leg left the conference (disconnected or separated out)
    LegRemoved {
        leg_id: LegId,
    },
    /// The capability set mutated; carries the new set
    CapabilitiesChanged {
        capabilities: ConferenceCapabilities,
    },
    /// The authoritative participant roster became known
    ParticipantsReceived,
    /// The conference lifecycle state changed
    StateChanged {
        old_state: ConferenceState,
        new_state: ConferenceState,
    },
}

/// Handler for conference events
#[async_trait]
pub trait ConferenceEventHandler: Send + Sync + std::fmt::Debug {
    /// Handle a conference event
    async fn handle_event(&self, event: ConferenceEvent);
}
