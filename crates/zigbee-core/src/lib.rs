//! Zigbee abstraction layer
//!
//! Cluster, profile and data type definitions plus the device descriptors
//! that device converters match against.

pub mod cluster;
pub mod device;

pub use cluster::{DataType, OnOffCommand};
pub use device::{DeviceType, Endpoint, ZigbeeDevice};
