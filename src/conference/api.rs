//! Conference Control API
//!
//! Host-facing callback surface for one conference. The host call-control
//! layer holds the manager through this trait and drives every transition;
//! the manager never originates or terminates network signaling itself, it
//! only aggregates and decides.
//!
//! Access is single-owner by construction: the mutating callbacks take
//! `&mut self`, so a shared instance must be serialized externally (a
//! single-threaded dispatcher or a mutex around the instance).

use async_trait::async_trait;

use crate::api::types::LegId;

use super::leg::Leg;

/// Host callbacks dispatched to a conference.
///
/// Every delegated leg operation may be rejected by the leg; rejections are
/// recorded and swallowed here, never surfaced to the caller. The host only
/// observes that the requested transition did not happen.
#[async_trait]
pub trait ConferenceControl: Send {
    /// A leg joined the conference (including at merge time).
    async fn on_leg_added(&mut self, leg: Leg);

    /// A leg left the conference after disconnecting or being separated out.
    async fn on_leg_removed(&mut self, leg_id: &LegId);

    /// Disconnect the conference and all of its legs.
    async fn on_disconnect(&self);

    /// Pull the given leg out of the conference back to a standalone call.
    /// The leg stays in the conference until its removal is reported.
    async fn on_separate(&self, leg: &Leg);

    /// Merge the given leg's calls into the conference via its owning
    /// endpoint.
    async fn on_merge(&self, leg: &Leg);

    /// Put the conference on hold.
    async fn on_hold(&self);

    /// Resume the conference from hold.
    async fn on_unhold(&self);

    /// Start playing a DTMF tone on the conference.
    async fn on_play_dtmf_tone(&self, tone: char);

    /// Stop the DTMF tone currently playing on the conference.
    async fn on_stop_dtmf_tone(&self);

    /// The participant event feed delivered an authoritative roster.
    async fn set_participants_received(&mut self);

    /// The conference's representative leg for UI/status purposes.
    ///
    /// # Panics
    ///
    /// Panics on an empty leg set. Callers must guarantee at least one leg
    /// exists before asking for a representative.
    fn primary_leg(&self) -> &Leg;
}
