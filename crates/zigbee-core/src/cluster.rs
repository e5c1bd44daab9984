//! ZCL (Zigbee Cluster Library) definitions

use serde::{Deserialize, Serialize};

/// ZCL cluster IDs used by the converters in this workspace
pub mod id {
    pub const BASIC: u16 = 0x0000;
    pub const IDENTIFY: u16 = 0x0003;
    pub const GROUPS: u16 = 0x0004;
    pub const SCENES: u16 = 0x0005;
    pub const ON_OFF: u16 = 0x0006;
    pub const ON_OFF_SWITCH_CONFIG: u16 = 0x0007;
    pub const OCCUPANCY_SENSING: u16 = 0x0406;
}

/// ZCL profile IDs
pub mod profile {
    pub const HOME_AUTOMATION: u16 = 0x0104;
}

/// Occupancy Sensing cluster attributes
pub mod occupancy_attrs {
    /// Bitmap8, bit 0 set when occupied
    pub const OCCUPANCY: u16 = 0x0000;
}

/// On/Off cluster commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum OnOffCommand {
    Off = 0x00,
    On = 0x01,
    Toggle = 0x02,
}

impl OnOffCommand {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(OnOffCommand::Off),
            0x01 => Some(OnOffCommand::On),
            0x02 => Some(OnOffCommand::Toggle),
            _ => None,
        }
    }
}

/// ZCL data type tags for the attribute types this workspace reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum DataType {
    Boolean = 0x10,
    Bitmap8 = 0x18,
    Uint8 = 0x20,
    Uint16 = 0x21,
}

impl DataType {
    /// Wire tag as sent in write and configure-reporting records
    #[must_use]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Largest value representable by the type
    #[must_use]
    pub fn max_value(self) -> u16 {
        match self {
            DataType::Boolean => 1,
            DataType::Bitmap8 | DataType::Uint8 => u16::from(u8::MAX),
            DataType::Uint16 => u16::MAX,
        }
    }
}
