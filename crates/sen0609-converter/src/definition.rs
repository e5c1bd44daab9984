//! Device definition tying decode, encode and configuration to the transport

use crate::decode::{self, AttributeEvent, DecodedReport};
use crate::encode;
use crate::error::ConverterError;
use crate::transport::ZclEndpoint;
use crate::value::FieldValue;
use serde::Serialize;
use zigbee_core::cluster::id;
use zigbee_core::OnOffCommand;

pub const MODEL: &str = "SEN0609-Zigbee";
pub const VENDOR: &str = "DFRobot";
pub const DESCRIPTION: &str = "SEN0609 mmWave presence sensor with Zigbee (CC2340)";

/// State published for one inbound message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<OnOffCommand>,
    #[serde(flatten)]
    pub config: DecodedReport,
}

impl DeviceState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_none() && self.action.is_none() && self.config.is_empty()
    }
}

/// Decode an attribute report or read response into published state
#[must_use]
pub fn from_zigbee(event: &AttributeEvent) -> DeviceState {
    if event.cluster_id != id::OCCUPANCY_SENSING {
        return DeviceState::default();
    }
    DeviceState {
        occupancy: decode::decode_occupancy(&event.attributes),
        action: None,
        config: decode::decode_event(event).unwrap_or_default(),
    }
}

/// Decode a cluster command sent by the device
#[must_use]
pub fn from_command(cluster_id: u16, command_id: u8) -> DeviceState {
    DeviceState {
        action: decode::decode_action(cluster_id, command_id),
        ..DeviceState::default()
    }
}

/// Write a configuration field and return the state to publish optimistically
pub async fn set(
    endpoint: &dyn ZclEndpoint,
    field: &str,
    value: FieldValue,
) -> Result<DecodedReport, ConverterError> {
    let encoded = encode::encode(field, value)?;
    tracing::debug!(
        "Writing {}={} as {:#06x}={} (type {:#04x}) on endpoint {}",
        field,
        value,
        encoded.write.attribute_id,
        encoded.write.value,
        encoded.write.data_type.tag(),
        endpoint.id()
    );
    endpoint
        .write(id::OCCUPANCY_SENSING, &[encoded.write])
        .await?;
    Ok(encoded.state)
}

/// Request a fresh value for a configuration field
///
/// The value arrives later as a read response.
pub async fn get(endpoint: &dyn ZclEndpoint, field: &str) -> Result<(), ConverterError> {
    let wire_id = encode::read_request(field)?;
    tracing::debug!("Reading {} ({:#06x}) on endpoint {}", field, wire_id, endpoint.id());
    endpoint.read(id::OCCUPANCY_SENSING, &[wire_id]).await?;
    Ok(())
}
