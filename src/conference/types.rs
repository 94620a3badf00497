//! Conference Types
//!
//! Capability and lifecycle types for a single conference.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single conference-level capability flag, readable by the host UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Another call may be added to the conference
    AddCall,
    /// The conference supports being held at all
    SupportHold,
    /// The conference may be put on hold right now
    Hold,
    /// The conference audio may be muted
    Mute,
    /// The host UI may offer per-participant management controls
    ManageConference,
}

/// Explicit capability set with named insert/remove operations.
///
/// Kept as a set rather than a raw bit-mask so the suppress-then-restore
/// policy around [`Capability::ManageConference`] stays auditable: the only
/// places that mutate it are `ConferenceManager::on_leg_added` and
/// `ConferenceManager::set_participants_received`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceCapabilities {
    flags: HashSet<Capability>,
}

impl ConferenceCapabilities {
    /// Empty capability set
    pub fn empty() -> Self {
        Self {
            flags: HashSet::new(),
        }
    }

    /// All five flags. Every conference starts here.
    pub fn full() -> Self {
        let mut flags = HashSet::new();
        flags.insert(Capability::AddCall);
        flags.insert(Capability::SupportHold);
        flags.insert(Capability::Hold);
        flags.insert(Capability::Mute);
        flags.insert(Capability::ManageConference);
        Self { flags }
    }

    /// Add a capability. Returns true if the set actually changed.
    pub fn insert(&mut self, capability: Capability) -> bool {
        self.flags.insert(capability)
    }

    /// Remove a capability. Returns true if the set actually changed.
    pub fn remove(&mut self, capability: Capability) -> bool {
        self.flags.remove(&capability)
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.flags.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.flags.iter().copied()
    }
}

impl Default for ConferenceCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

/// Lifecycle state of the conference as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConferenceState {
    /// The conference is live
    Active,
    /// The conference is held as a unit
    OnHold,
    /// The underlying call ended or the conference was torn down
    Disconnected,
}
