//! Shared mock legs, connections and event handlers for conference tests.
//!
//! Mirrors the object graph the conference consumes: a radio leg resolves to
//! a backing connection, the connection to a signaling call, and the leg to
//! an owning endpoint. Every mock records the operations requested of it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use conference_core::prelude::*;

/// Install a test-friendly tracing subscriber so the manager's debug/warn
/// output lands in the captured test output. Safe to call from every test;
/// only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Records the operations requested of a mock object, in order.
#[derive(Debug, Default)]
pub struct OpLog {
    ops: Mutex<Vec<String>>,
}

impl OpLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record(&self, op: &str) {
        self.ops.lock().unwrap().push(op.to_string());
    }

    pub fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.ops.lock().unwrap().iter().filter(|o| *o == op).count()
    }
}

/// Mock network-level call.
#[derive(Debug)]
pub struct MockCall {
    pub multiparty: bool,
    pub fail_hangup: bool,
    pub log: Arc<OpLog>,
}

#[async_trait]
impl SignalingCall for MockCall {
    fn is_multiparty(&self) -> bool {
        self.multiparty
    }

    async fn hangup(&self) -> Result<()> {
        self.log.record("hangup");
        if self.fail_hangup {
            Err(ConferenceError::invalid_call_state("hangup rejected"))
        } else {
            Ok(())
        }
    }
}

/// Mock signaling-layer connection behind a radio leg.
#[derive(Debug)]
pub struct MockConnection {
    pub multiparty: bool,
    pub call: Option<Arc<MockCall>>,
    pub fail_separate: bool,
    pub log: Arc<OpLog>,
}

#[async_trait]
impl BackingConnection for MockConnection {
    fn is_multiparty(&self) -> bool {
        self.multiparty
    }

    fn call(&self) -> Option<Arc<dyn SignalingCall>> {
        self.call.clone().map(|call| call as Arc<dyn SignalingCall>)
    }

    async fn separate(&self) -> Result<()> {
        self.log.record("separate");
        if self.fail_separate {
            Err(ConferenceError::invalid_call_state("separate rejected"))
        } else {
            Ok(())
        }
    }
}

/// Mock call-control endpoint.
#[derive(Debug)]
pub struct MockEndpoint {
    pub fail_merge: bool,
    pub log: Arc<OpLog>,
}

#[async_trait]
impl CallEndpoint for MockEndpoint {
    async fn request_merge(&self) -> Result<()> {
        self.log.record("request_merge");
        if self.fail_merge {
            Err(ConferenceError::invalid_call_state("merge rejected"))
        } else {
            Ok(())
        }
    }
}

/// Mock radio-backed conference leg.
#[derive(Debug)]
pub struct MockRadioLeg {
    pub id: LegId,
    pub was_multiparty: bool,
    pub connection: Option<Arc<MockConnection>>,
    pub endpoint: Option<Arc<MockEndpoint>>,
    pub fail_ops: bool,
    pub log: Arc<OpLog>,
}

impl MockRadioLeg {
    pub fn new(name: &str) -> Self {
        Self {
            id: LegId(name.to_string()),
            was_multiparty: false,
            connection: None,
            endpoint: None,
            fail_ops: false,
            log: OpLog::new(),
        }
    }

    pub fn with_sticky_multiparty(mut self) -> Self {
        self.was_multiparty = true;
        self
    }

    pub fn with_connection(mut self, connection: Arc<MockConnection>) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn with_endpoint(mut self, endpoint: Arc<MockEndpoint>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_failing_ops(mut self) -> Self {
        self.fail_ops = true;
        self
    }

    pub fn with_log(mut self, log: Arc<OpLog>) -> Self {
        self.log = log;
        self
    }

    pub fn into_leg(self) -> Leg {
        Leg::Radio(Arc::new(self))
    }

    fn op(&self, name: &str) -> Result<()> {
        self.log.record(name);
        if self.fail_ops {
            Err(ConferenceError::leg_operation(name, "rejected by leg"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ConferenceLeg for MockRadioLeg {
    fn id(&self) -> LegId {
        self.id.clone()
    }

    async fn hold(&self) -> Result<()> {
        self.op("hold")
    }

    async fn unhold(&self) -> Result<()> {
        self.op("unhold")
    }

    async fn play_dtmf(&self, tone: char) -> Result<()> {
        self.op(&format!("play_dtmf:{}", tone))
    }

    async fn stop_dtmf(&self) -> Result<()> {
        self.op("stop_dtmf")
    }
}

impl RadioLeg for MockRadioLeg {
    fn backing_connection(&self) -> Option<Arc<dyn BackingConnection>> {
        self.connection
            .clone()
            .map(|connection| connection as Arc<dyn BackingConnection>)
    }

    fn was_multiparty_signaling(&self) -> bool {
        self.was_multiparty
    }

    fn owner_endpoint(&self) -> Option<Arc<dyn CallEndpoint>> {
        self.endpoint
            .clone()
            .map(|endpoint| endpoint as Arc<dyn CallEndpoint>)
    }
}

/// Mock leg with no radio backing at all.
#[derive(Debug)]
pub struct MockExternalLeg {
    pub id: LegId,
    pub log: Arc<OpLog>,
}

impl MockExternalLeg {
    pub fn new(name: &str) -> Self {
        Self {
            id: LegId(name.to_string()),
            log: OpLog::new(),
        }
    }

    pub fn into_leg(self) -> Leg {
        Leg::External(Arc::new(self))
    }
}

#[async_trait]
impl ConferenceLeg for MockExternalLeg {
    fn id(&self) -> LegId {
        self.id.clone()
    }

    async fn hold(&self) -> Result<()> {
        self.log.record("hold");
        Ok(())
    }

    async fn unhold(&self) -> Result<()> {
        self.log.record("unhold");
        Ok(())
    }

    async fn play_dtmf(&self, tone: char) -> Result<()> {
        self.log.record(&format!("play_dtmf:{}", tone));
        Ok(())
    }

    async fn stop_dtmf(&self) -> Result<()> {
        self.log.record("stop_dtmf");
        Ok(())
    }
}

/// Plain radio leg: backing connection and call present, nothing multiparty.
/// All operations (leg, connection and call level) record into the returned log.
pub fn plain_radio_leg(name: &str) -> (Leg, Arc<OpLog>) {
    let log = OpLog::new();
    let call = Arc::new(MockCall {
        multiparty: false,
        fail_hangup: false,
        log: log.clone(),
    });
    let connection = Arc::new(MockConnection {
        multiparty: false,
        call: Some(call),
        fail_separate: false,
        log: log.clone(),
    });
    let leg = MockRadioLeg::new(name)
        .with_connection(connection)
        .with_log(log.clone())
        .into_leg();
    (leg, log)
}

/// Radio leg whose backing connection maps to a multiparty call.
pub fn leg_with_multiparty_call(name: &str, fail_hangup: bool) -> (Leg, Arc<OpLog>) {
    let log = OpLog::new();
    let call = Arc::new(MockCall {
        multiparty: true,
        fail_hangup,
        log: log.clone(),
    });
    let connection = Arc::new(MockConnection {
        multiparty: false,
        call: Some(call),
        fail_separate: false,
        log: log.clone(),
    });
    let leg = MockRadioLeg::new(name)
        .with_connection(connection)
        .with_log(log.clone())
        .into_leg();
    (leg, log)
}

/// Test event handler that collects events
#[derive(Debug)]
pub struct TestEventHandler {
    events: Arc<tokio::sync::Mutex<Vec<ConferenceEvent>>>,
}

impl TestEventHandler {
    pub fn new() -> (Self, Arc<tokio::sync::Mutex<Vec<ConferenceEvent>>>) {
        let events = Arc::new(tokio::sync::Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

#[async_trait]
impl ConferenceEventHandler for TestEventHandler {
    async fn handle_event(&self, event: ConferenceEvent) {
        let mut events = self.events.lock().await;
        events.push(event);
    }
}

/// Capability sets carried by the CapabilitiesChanged events, in order.
pub fn capability_changes(events: &[ConferenceEvent]) -> Vec<ConferenceCapabilities> {
    events
        .iter()
        .filter_map(|event| match event {
            ConferenceEvent::CapabilitiesChanged { capabilities } => Some(capabilities.clone()),
            _ => None,
        })
        .collect()
}
