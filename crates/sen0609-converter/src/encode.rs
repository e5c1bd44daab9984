//! Outbound set/get requests

use crate::decode::DecodedReport;
use crate::error::ConverterError;
use crate::registry::{self, WireType};
use crate::value::FieldValue;
use serde::Serialize;
use zigbee_core::DataType;

/// One attribute write, ready for the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeWrite {
    pub attribute_id: u16,
    pub data_type: DataType,
    pub value: u16,
}

/// Result of encoding a set request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSet {
    pub write: AttributeWrite,
    /// Optimistic state to publish before the device confirms
    pub state: DecodedReport,
}

/// Validate `value` against the field's domain and build its attribute write
pub fn encode(field: &str, value: FieldValue) -> Result<EncodedSet, ConverterError> {
    let attr = registry::lookup(field)?;

    let raw = value.as_u64();
    if !attr.contains(raw) {
        return Err(ConverterError::OutOfRange {
            field: attr.name,
            value: raw,
            min: attr.min,
            max: attr.max,
        });
    }

    // Domain bounds are u16, so the value fits
    let wire_value = raw as u16;
    let semantic = match attr.wire_type {
        WireType::Boolean => FieldValue::Bool(wire_value != 0),
        WireType::Uint8 | WireType::Uint16 => FieldValue::Number(raw),
    };

    let mut state = DecodedReport::default();
    state.insert(attr.name, semantic);

    Ok(EncodedSet {
        write: AttributeWrite {
            attribute_id: attr.wire_id,
            data_type: attr.wire_type.data_type(),
            value: wire_value,
        },
        state,
    })
}

/// Wire id to read for a get request
pub fn read_request(field: &str) -> Result<u16, ConverterError> {
    registry::lookup(field).map(|attr| attr.wire_id)
}
