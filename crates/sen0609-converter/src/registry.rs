//! Static table of the SEN0609 vendor attributes on the Occupancy Sensing cluster

use crate::error::ConverterError;
use zigbee_core::DataType;

/// Wire encodings used by the vendor attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Boolean,
    Uint8,
    Uint16,
}

impl WireType {
    /// ZCL data type tag sent alongside writes
    #[must_use]
    pub fn data_type(self) -> DataType {
        match self {
            WireType::Boolean => DataType::Boolean,
            WireType::Uint8 => DataType::Uint8,
            WireType::Uint16 => DataType::Uint16,
        }
    }
}

/// One configuration field of the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub wire_id: u16,
    pub wire_type: WireType,
    /// Inclusive semantic domain; `0..=1` for the boolean field
    pub min: u16,
    pub max: u16,
    pub unit: Option<&'static str>,
    pub description: &'static str,
}

impl AttributeSpec {
    #[must_use]
    pub fn contains(&self, value: u64) -> bool {
        (u64::from(self.min)..=u64::from(self.max)).contains(&value)
    }
}

const fn spec(
    name: &'static str,
    wire_id: u16,
    wire_type: WireType,
    min: u16,
    max: u16,
    unit: Option<&'static str>,
    description: &'static str,
) -> AttributeSpec {
    AttributeSpec {
        name,
        wire_id,
        wire_type,
        min,
        max,
        unit,
        description,
    }
}

/// Every vendor attribute, in wire id order
pub static ATTRIBUTES: [AttributeSpec; 9] = [
    spec(
        "range_min",
        0xE000,
        WireType::Uint16,
        30,
        2000,
        Some("cm"),
        "Minimum detection range",
    ),
    spec(
        "range_max",
        0xE001,
        WireType::Uint16,
        240,
        2000,
        Some("cm"),
        "Maximum detection range",
    ),
    spec(
        "trigger_range",
        0xE002,
        WireType::Uint16,
        30,
        2000,
        Some("cm"),
        "Trigger detection range",
    ),
    spec(
        "trigger_sensitivity",
        0xE003,
        WireType::Uint8,
        0,
        9,
        None,
        "Trigger sensitivity (0=low, 9=high)",
    ),
    spec(
        "keep_sensitivity",
        0xE004,
        WireType::Uint8,
        0,
        9,
        None,
        "Keep sensitivity (0=low, 9=high)",
    ),
    spec(
        "trigger_delay",
        0xE005,
        WireType::Uint8,
        0,
        200,
        None,
        "Trigger delay (unit: 10 ms, range 0-2 s)",
    ),
    spec(
        "keep_timeout",
        0xE006,
        WireType::Uint16,
        4,
        3000,
        None,
        "Keep timeout (unit: 500 ms, range 2-1500 s)",
    ),
    spec(
        "io_polarity",
        0xE007,
        WireType::Uint8,
        0,
        1,
        None,
        "Output pin polarity",
    ),
    spec(
        "fretting",
        0xE008,
        WireType::Boolean,
        0,
        1,
        None,
        "Micromotion (fretting) detection",
    ),
];

/// Find a field by name
pub fn lookup(name: &str) -> Result<&'static AttributeSpec, ConverterError> {
    ATTRIBUTES
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| ConverterError::UnknownField(name.to_string()))
}

/// Find the field owning a wire id; ids outside the table are not ours
#[must_use]
pub fn by_wire_id(wire_id: u16) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|a| a.wire_id == wire_id)
}

/// All owned wire ids, in table order
pub fn wire_ids() -> impl Iterator<Item = u16> {
    ATTRIBUTES.iter().map(|a| a.wire_id)
}
