//! In-memory transport used by the unit tests

use crate::configure::ReportingSubscription;
use crate::encode::AttributeWrite;
use crate::error::TransportError;
use crate::transport::{ZclDevice, ZclEndpoint};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Bind {
        cluster_id: u16,
        coordinator_endpoint: u8,
    },
    ConfigureReporting {
        cluster_id: u16,
        subscriptions: Vec<ReportingSubscription>,
    },
    Read {
        cluster_id: u16,
        attribute_ids: Vec<u16>,
    },
    Write {
        cluster_id: u16,
        writes: Vec<AttributeWrite>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Bind,
    ConfigureReporting,
    Read,
    Write,
}

/// What the device would remember after the calls it accepted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceState {
    pub bindings: BTreeSet<(u16, u8)>,
    pub subscriptions: BTreeMap<(u16, u16), ReportingSubscription>,
    pub attributes: BTreeMap<u16, u16>,
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    state: DeviceState,
    failure: Option<(Step, TransportError)>,
}

pub struct MockEndpoint {
    id: u8,
    inner: Mutex<Inner>,
}

impl MockEndpoint {
    pub fn new(id: u8) -> Self {
        Self {
            id,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn fail_on(&self, step: Step, error: TransportError) {
        self.inner.lock().unwrap().failure = Some((step, error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn device_state(&self) -> DeviceState {
        self.inner.lock().unwrap().state.clone()
    }

    fn record(&self, step: Step, call: Call) -> Result<(), TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call.clone());
        if let Some((failing, error)) = &inner.failure {
            if *failing == step {
                return Err(error.clone());
            }
        }
        match call {
            Call::Bind {
                cluster_id,
                coordinator_endpoint,
            } => {
                inner.state.bindings.insert((cluster_id, coordinator_endpoint));
            }
            Call::ConfigureReporting { subscriptions, .. } => {
                for s in subscriptions {
                    inner
                        .state
                        .subscriptions
                        .insert((s.cluster_id, s.attribute_id), s);
                }
            }
            Call::Write { writes, .. } => {
                for w in writes {
                    inner.state.attributes.insert(w.attribute_id, w.value);
                }
            }
            Call::Read { .. } => {}
        }
        Ok(())
    }
}

#[async_trait]
impl ZclEndpoint for MockEndpoint {
    fn id(&self) -> u8 {
        self.id
    }

    async fn bind(&self, cluster_id: u16, coordinator_endpoint: u8) -> Result<(), TransportError> {
        self.record(
            Step::Bind,
            Call::Bind {
                cluster_id,
                coordinator_endpoint,
            },
        )
    }

    async fn configure_reporting(
        &self,
        cluster_id: u16,
        subscriptions: &[ReportingSubscription],
    ) -> Result<(), TransportError> {
        self.record(
            Step::ConfigureReporting,
            Call::ConfigureReporting {
                cluster_id,
                subscriptions: subscriptions.to_vec(),
            },
        )
    }

    async fn read(&self, cluster_id: u16, attribute_ids: &[u16]) -> Result<(), TransportError> {
        self.record(
            Step::Read,
            Call::Read {
                cluster_id,
                attribute_ids: attribute_ids.to_vec(),
            },
        )
    }

    async fn write(
        &self,
        cluster_id: u16,
        writes: &[AttributeWrite],
    ) -> Result<(), TransportError> {
        self.record(
            Step::Write,
            Call::Write {
                cluster_id,
                writes: writes.to_vec(),
            },
        )
    }
}

pub struct MockDevice {
    pub endpoint: MockEndpoint,
}

impl MockDevice {
    pub fn new(endpoint_id: u8) -> Self {
        Self {
            endpoint: MockEndpoint::new(endpoint_id),
        }
    }
}

impl ZclDevice for MockDevice {
    fn endpoint(&self, id: u8) -> Option<&dyn ZclEndpoint> {
        (self.endpoint.id == id).then_some(&self.endpoint as &dyn ZclEndpoint)
    }
}
