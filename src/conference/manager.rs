//! Conference Manager
//!
//! The decision engine for one conference: aggregates independent call legs
//! into a single logical call, derives the capability set from the
//! conference's composition and signaling history, selects a representative
//! leg, and dispatches conference-level operations onto the correct
//! underlying leg(s).

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::types::{AccountId, LegId};

use super::api::ConferenceControl;
use super::events::{ConferenceEvent, ConferenceEventHandler};
use super::leg::{Leg, SignalingCall};
use super::types::{Capability, ConferenceCapabilities, ConferenceState};

/// Manager for a single multi-leg conference.
///
/// Leg order is join order; legs are held as references for their active
/// lifetime only (the conference never creates or destroys them). Not
/// internally synchronized: mutating callbacks take `&mut self`, and one
/// call-control context must own the instance at a time.
pub struct ConferenceManager {
    /// Identity context the conference was created under
    account: AccountId,
    /// Participating legs, insertion order == join order
    legs: Vec<Leg>,
    /// Current conference-level capability set
    capabilities: ConferenceCapabilities,
    /// Monotonic: flips to true the first time the participant event feed
    /// delivers an authoritative roster, and never back
    participants_received: bool,
    /// Lifecycle state
    state: ConferenceState,
    /// Event handlers, registered by unique name
    event_handlers: Vec<(String, Arc<dyn ConferenceEventHandler>)>,
}

impl ConferenceManager {
    /// Create a manager for a new conference under the given account.
    ///
    /// Starts active with the full capability set and no legs attached; legs
    /// arrive through [`ConferenceControl::on_leg_added`] when the
    /// collaborator layer merges calls in.
    pub fn new(account: AccountId) -> Self {
        debug!("Creating conference for account {}", account);
        Self {
            account,
            legs: Vec::new(),
            capabilities: ConferenceCapabilities::full(),
            participants_received: false,
            state: ConferenceState::Active,
            event_handlers: Vec::new(),
        }
    }

    /// Account the conference belongs to
    pub fn account(&self) -> &AccountId {
        &self.account
    }

    /// Participating legs in join order
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of participating legs
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Current capability set
    pub fn capabilities(&self) -> &ConferenceCapabilities {
        &self.capabilities
    }

    /// Whether the authoritative participant roster has been received
    pub fn participants_received(&self) -> bool {
        self.participants_received
    }

    /// Current lifecycle state
    pub fn state(&self) -> ConferenceState {
        self.state
    }

    /// Add an event handler with a unique name
    pub fn add_event_handler(&mut self, name: &str, handler: Arc<dyn ConferenceEventHandler>) {
        self.event_handlers.push((name.to_string(), handler));
    }

    /// Remove an event handler by name. Returns true if one was removed.
    pub fn remove_event_handler(&mut self, name: &str) -> bool {
        if let Some(pos) = self.event_handlers.iter().position(|(n, _)| n == name) {
            self.event_handlers.remove(pos);
            true
        } else {
            false
        }
    }

    /// Get count of registered event handlers
    pub fn event_handler_count(&self) -> usize {
        self.event_handlers.len()
    }

    /// Move the conference to a new lifecycle state, publishing
    /// [`ConferenceEvent::StateChanged`] when it actually changes.
    pub async fn set_state(&mut self, state: ConferenceState) {
        if state != self.state {
            let old_state = self.state;
            self.state = state;
            self.publish_event(ConferenceEvent::StateChanged {
                old_state,
                new_state: state,
            })
            .await;
        }
    }

    /// Publish an event to all handlers
    async fn publish_event(&self, event: ConferenceEvent) {
        for (_, handler) in self.event_handlers.iter() {
            handler.handle_event(event.clone()).await;
        }
    }

    /// First leg in join order, the canonical handle for conference-wide
    /// hold/unhold and DTMF.
    fn first_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }

    /// Backing call for a leg, but only when the signaling layer reports the
    /// call as multiparty.
    fn multiparty_call_for_leg(&self, leg: &Leg) -> Option<Arc<dyn SignalingCall>> {
        let call = leg.backing_connection()?.call()?;
        if call.is_multiparty() {
            Some(call)
        } else {
            None
        }
    }
}

impl std::fmt::Debug for ConferenceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConferenceManager")
            .field("account", &self.account)
            .field("legs", &self.legs.len())
            .field("capabilities", &self.capabilities)
            .field("participants_received", &self.participants_received)
            .field("state", &self.state)
            .finish()
    }
}

#[async_trait]
impl ConferenceControl for ConferenceManager {
    async fn on_leg_added(&mut self, leg: Leg) {
        let leg_id = leg.id();
        let sticky_multiparty = leg.was_multiparty_signaling();
        self.legs.push(leg);
        self.publish_event(ConferenceEvent::LegAdded {
            leg_id: leg_id.clone(),
            joined_at: Instant::now(),
        })
        .await;

        // A leg that was ever part of an IMS-style conference cannot be
        // safely managed until the participant roster is known. Suppress
        // MANAGE_CONFERENCE now; set_participants_received restores it for
        // good once data arrives, and it is never re-suppressed afterwards.
        if sticky_multiparty
            && !self.participants_received
            && self.capabilities.contains(Capability::ManageConference)
        {
            self.capabilities.remove(Capability::ManageConference);
            debug!(
                "Suppressed conference management: leg {} has IMS history and no participant data yet",
                leg_id
            );
            self.publish_event(ConferenceEvent::CapabilitiesChanged {
                capabilities: self.capabilities.clone(),
            })
            .await;
        }
    }

    async fn on_leg_removed(&mut self, leg_id: &LegId) {
        let before = self.legs.len();
        self.legs.retain(|leg| leg.id() != *leg_id);
        if self.legs.len() < before {
            self.publish_event(ConferenceEvent::LegRemoved {
                leg_id: leg_id.clone(),
            })
            .await;
        }
    }

    async fn on_disconnect(&self) {
        // Hanging up the shared multiparty call legitimately terminates all
        // of its member legs at once, so stop at the first call that accepts
        // the hangup. A rejected hangup moves on to the next qualifying leg
        // instead of aborting the disconnect. No qualifying leg is the
        // expected case when the conference is already down to one real call.
        for leg in self.legs.iter() {
            if let Some(call) = self.multiparty_call_for_leg(leg) {
                debug!("Found multiparty call to hang up for conference");
                match call.hangup().await {
                    Ok(()) => break,
                    Err(e) => warn!("Failed to hang up conference call: {}", e),
                }
            }
        }
    }

    async fn on_separate(&self, leg: &Leg) {
        match leg.backing_connection() {
            Some(connection) => {
                if let Err(e) = connection.separate().await {
                    // The leg stays in the conference; the caller must not
                    // assume the separation took effect.
                    warn!("Failed to separate leg {} from conference: {}", leg.id(), e);
                }
            }
            None => {
                debug!("No backing connection for leg {}, separate ignored", leg.id());
            }
        }
    }

    async fn on_merge(&self, leg: &Leg) {
        match leg.owner_endpoint() {
            Some(endpoint) => {
                if let Err(e) = endpoint.request_merge().await {
                    warn!("Failed to merge leg {} into conference: {}", leg.id(), e);
                }
            }
            None => {
                // Downstream callers may hand us generic leg handles with no
                // resolvable endpoint.
                debug!("No endpoint for leg {}, merge ignored", leg.id());
            }
        }
    }

    async fn on_hold(&self) {
        if let Some(leg) = self.first_leg() {
            if let Err(e) = leg.hold().await {
                warn!("Failed to hold conference: {}", e);
            }
        }
    }

    async fn on_unhold(&self) {
        if let Some(leg) = self.first_leg() {
            if let Err(e) = leg.unhold().await {
                warn!("Failed to unhold conference: {}", e);
            }
        }
    }

    async fn on_play_dtmf_tone(&self, tone: char) {
        if let Some(leg) = self.first_leg() {
            if let Err(e) = leg.play_dtmf(tone).await {
                warn!("Failed to play DTMF tone '{}' on conference: {}", tone, e);
            }
        }
    }

    async fn on_stop_dtmf_tone(&self) {
        if let Some(leg) = self.first_leg() {
            if let Err(e) = leg.stop_dtmf().await {
                warn!("Failed to stop DTMF tone on conference: {}", e);
            }
        }
    }

    async fn set_participants_received(&mut self) {
        // Guard on the old value: repeat deliveries must not re-toggle the
        // capability. The restore wins over any earlier suppression from
        // on_leg_added and is permanent.
        if !self.participants_received {
            if self.capabilities.insert(Capability::ManageConference) {
                self.publish_event(ConferenceEvent::CapabilitiesChanged {
                    capabilities: self.capabilities.clone(),
                })
                .await;
            }
            self.publish_event(ConferenceEvent::ParticipantsReceived).await;
        }
        self.participants_received = true;
    }

    fn primary_leg(&self) -> &Leg {
        // A leg whose backing connection is still multiparty at the
        // signaling layer anchors the conference and is more representative
        // than an arbitrary first-joined leg; first match wins. Otherwise
        // default to the first leg in join order.
        self.legs
            .iter()
            .find(|leg| {
                leg.backing_connection()
                    .map(|connection| connection.is_multiparty())
                    .unwrap_or(false)
            })
            .unwrap_or(&self.legs[0])
    }
}
