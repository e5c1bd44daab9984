//! Zigbee converter for the DFRobot SEN0609 mmWave presence sensor
//!
//! Recognizes the sensor by its endpoint layout, decodes its vendor
//! configuration attributes on the Occupancy Sensing cluster, encodes
//! configuration writes, and sets up occupancy reporting when the device
//! joins. The radio stack and state publishing belong to the host, which
//! plugs in through [`transport::ZclEndpoint`].

pub mod configure;
pub mod decode;
pub mod definition;
pub mod encode;
pub mod error;
pub mod expose;
pub mod fingerprint;
pub mod registry;
pub mod transport;
pub mod value;

#[cfg(test)]
mod testing;

pub use configure::{configure, ConfigureOptions, ReportingSubscription};
pub use decode::{decode, AttributeEvent, DecodedReport, EventKind};
pub use definition::{from_command, from_zigbee, get, set, DeviceState};
pub use encode::{encode, AttributeWrite, EncodedSet};
pub use error::{ConverterError, TransportError};
pub use fingerprint::matches;
pub use registry::{AttributeSpec, WireType};
pub use transport::{ZclDevice, ZclEndpoint};
pub use value::{FieldValue, RawValue};
