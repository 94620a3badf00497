//! Conference Leg Abstractions
//!
//! A leg is one call connection participating in a conference. The conference
//! neither creates nor destroys legs; it holds handles for their active
//! lifetime and delegates every operation to them. Operations are
//! fire-and-forget requests: `Ok` means the leg accepted the request, and
//! final completion is reported through the leg's own channel, outside this
//! crate.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::api::types::LegId;
use crate::errors::Result;

/// Operations every conference leg supports, radio-backed or not.
#[async_trait]
pub trait ConferenceLeg: Send + Sync + fmt::Debug {
    fn id(&self) -> LegId;

    /// Request that this leg be put on hold.
    async fn hold(&self) -> Result<()>;

    /// Request that this leg resume from hold.
    async fn unhold(&self) -> Result<()>;

    /// Start playing a DTMF tone on this leg.
    async fn play_dtmf(&self, tone: char) -> Result<()>;

    /// Stop any DTMF tone currently playing on this leg.
    async fn stop_dtmf(&self) -> Result<()>;
}

/// A leg backed by the radio/signaling layer, with access to the original
/// connection underneath the conference bookkeeping.
pub trait RadioLeg: ConferenceLeg {
    /// Live signaling-layer connection behind this leg, if still attached.
    fn backing_connection(&self) -> Option<Arc<dyn BackingConnection>>;

    /// Sticky flag: true once this leg has ever been part of an IMS-style
    /// conference, for the rest of its life.
    fn was_multiparty_signaling(&self) -> bool;

    /// Call-control endpoint that owns this leg, when one is resolvable.
    fn owner_endpoint(&self) -> Option<Arc<dyn CallEndpoint>>;
}

/// The signaling-layer connection a radio leg is built on.
#[async_trait]
pub trait BackingConnection: Send + Sync + fmt::Debug {
    /// Whether the signaling layer currently reports this connection as
    /// multiparty. Live state, not sticky.
    fn is_multiparty(&self) -> bool;

    /// The call this connection belongs to, if any.
    fn call(&self) -> Option<Arc<dyn SignalingCall>>;

    /// Pull this connection out of the conference back to a standalone call.
    async fn separate(&self) -> Result<()>;
}

/// A network-level call, possibly shared by several connections.
#[async_trait]
pub trait SignalingCall: Send + Sync + fmt::Debug {
    /// Whether this call represents more than one remote party.
    fn is_multiparty(&self) -> bool;

    /// Terminate the call, and with it every member connection.
    async fn hangup(&self) -> Result<()>;
}

/// Call-control endpoint ("phone") that can merge its calls into a
/// conference.
#[async_trait]
pub trait CallEndpoint: Send + Sync + fmt::Debug {
    /// Ask the endpoint to perform a conference-merge of its calls.
    async fn request_merge(&self) -> Result<()>;
}

/// A leg participating in a conference.
///
/// Radio legs expose their backing connection, signaling history and owner
/// endpoint; any other leg type resolves those to `None`, and conference
/// operations that need them become silent no-ops. This replaces a runtime
/// type check with a typed variant.
#[derive(Debug, Clone)]
pub enum Leg {
    /// A leg backed by the radio layer
    Radio(Arc<dyn RadioLeg>),
    /// A generic leg with no radio backing
    External(Arc<dyn ConferenceLeg>),
}

impl Leg {
    pub fn id(&self) -> LegId {
        match self {
            Leg::Radio(leg) => leg.id(),
            Leg::External(leg) => leg.id(),
        }
    }

    /// The radio-backed view of this leg, if it has one.
    pub fn as_radio(&self) -> Option<&Arc<dyn RadioLeg>> {
        match self {
            Leg::Radio(leg) => Some(leg),
            Leg::External(_) => None,
        }
    }

    /// Backing connection, `None` for external legs or detached radio legs.
    pub fn backing_connection(&self) -> Option<Arc<dyn BackingConnection>> {
        self.as_radio().and_then(|leg| leg.backing_connection())
    }

    /// Sticky IMS-history flag; external legs never report it.
    pub fn was_multiparty_signaling(&self) -> bool {
        self.as_radio()
            .map(|leg| leg.was_multiparty_signaling())
            .unwrap_or(false)
    }

    /// Owning call-control endpoint, `None` when not resolvable.
    pub fn owner_endpoint(&self) -> Option<Arc<dyn CallEndpoint>> {
        self.as_radio().and_then(|leg| leg.owner_endpoint())
    }

    pub async fn hold(&self) -> Result<()> {
        match self {
            Leg::Radio(leg) => leg.hold().await,
            Leg::External(leg) => leg.hold().await,
        }
    }

    pub async fn unhold(&self) -> Result<()> {
        match self {
            Leg::Radio(leg) => leg.unhold().await,
            Leg::External(leg) => leg.unhold().await,
        }
    }

    pub async fn play_dtmf(&self, tone: char) -> Result<()> {
        match self {
            Leg::Radio(leg) => leg.play_dtmf(tone).await,
            Leg::External(leg) => leg.play_dtmf(tone).await,
        }
    }

    pub async fn stop_dtmf(&self) -> Result<()> {
        match self {
            Leg::Radio(leg) => leg.stop_dtmf().await,
            Leg::External(leg) => leg.stop_dtmf().await,
        }
    }
}
