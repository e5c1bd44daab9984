//! Inbound attribute and command decoding

use crate::registry::{self, WireType};
use crate::value::{FieldValue, RawValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use zigbee_core::cluster::{id, occupancy_attrs};
use zigbee_core::{DataType, OnOffCommand};

/// Kind of inbound attribute message; both decode the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Report,
    ReadResponse,
}

/// Attribute report or read response received from the device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeEvent {
    pub cluster_id: u16,
    pub kind: EventKind,
    pub attributes: HashMap<u16, RawValue>,
}

/// Sparse field → value mapping for one event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DecodedReport(BTreeMap<&'static str, FieldValue>);

impl DecodedReport {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<FieldValue> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, field: &'static str, value: FieldValue) {
        self.0.insert(field, value);
    }
}

/// Decode the vendor attributes present in `attributes`
///
/// Ids not in the registry are ignored. A value that cannot be normalized
/// is dropped on its own; the rest of the event still decodes.
#[must_use]
pub fn decode(attributes: &HashMap<u16, RawValue>) -> DecodedReport {
    let mut report = DecodedReport::default();

    for attr in &registry::ATTRIBUTES {
        let Some(raw) = attributes.get(&attr.wire_id) else {
            continue;
        };

        let value = match attr.wire_type {
            WireType::Boolean => raw.truthy().map(FieldValue::Bool),
            WireType::Uint8 | WireType::Uint16 => {
                let max = attr.wire_type.data_type().max_value();
                raw.saturating_uint(max).map(FieldValue::from)
            }
        };

        match value {
            Some(value) => {
                if !attr.contains(value.as_u64()) {
                    tracing::debug!(
                        "{} reported {} outside {}..={}, passing through",
                        attr.name,
                        value,
                        attr.min,
                        attr.max
                    );
                }
                report.insert(attr.name, value);
            }
            None => {
                tracing::warn!(
                    "Dropping malformed value for {} ({:#06x}): {:?}",
                    attr.name,
                    attr.wire_id,
                    raw
                );
            }
        }
    }

    report
}

/// Decode an attribute event addressed to the Occupancy Sensing cluster
///
/// Returns `None` for events on other clusters.
#[must_use]
pub fn decode_event(event: &AttributeEvent) -> Option<DecodedReport> {
    if event.cluster_id != id::OCCUPANCY_SENSING {
        return None;
    }
    let report = decode(&event.attributes);
    tracing::debug!(
        "Decoded {:?} with {} of {} attributes",
        event.kind,
        report.len(),
        event.attributes.len()
    );
    Some(report)
}

/// Occupancy bit from the standard occupancy attribute, if present
#[must_use]
pub fn decode_occupancy(attributes: &HashMap<u16, RawValue>) -> Option<bool> {
    let raw = attributes.get(&occupancy_attrs::OCCUPANCY)?;
    let bits = raw.saturating_uint(DataType::Bitmap8.max_value());
    if bits.is_none() {
        tracing::warn!("Dropping malformed occupancy value: {:?}", raw);
    }
    bits.map(|b| b & 0x01 != 0)
}

/// Button action carried by an On/Off cluster command from the device
#[must_use]
pub fn decode_action(cluster_id: u16, command_id: u8) -> Option<OnOffCommand> {
    if cluster_id != id::ON_OFF {
        return None;
    }
    OnOffCommand::from_u8(command_id)
}
