//! Capability descriptions handed to the host UI

use crate::registry::{self, AttributeSpec};
use serde::Serialize;

/// Value is published in device state
pub const ACCESS_STATE: u8 = 0b001;
/// Value can be set
pub const ACCESS_SET: u8 = 0b010;
/// Value can be read on demand
pub const ACCESS_GET: u8 = 0b100;
pub const ACCESS_ALL: u8 = ACCESS_STATE | ACCESS_SET | ACCESS_GET;

/// One exposed capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expose {
    Binary {
        name: &'static str,
        access: u8,
        value_on: serde_json::Value,
        value_off: serde_json::Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<&'static str>,
    },
    Numeric {
        name: &'static str,
        access: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<&'static str>,
        value_min: u16,
        value_max: u16,
        description: &'static str,
    },
    Enum {
        name: &'static str,
        access: u8,
        values: Vec<&'static str>,
    },
}

impl Expose {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Expose::Binary { name, .. }
            | Expose::Numeric { name, .. }
            | Expose::Enum { name, .. } => *name,
        }
    }
}

fn config_expose(attr: &AttributeSpec) -> Expose {
    match attr.name {
        "io_polarity" => Expose::Binary {
            name: attr.name,
            access: ACCESS_ALL,
            value_on: 1.into(),
            value_off: 0.into(),
            description: Some(attr.description),
        },
        "fretting" => Expose::Binary {
            name: attr.name,
            access: ACCESS_ALL,
            value_on: true.into(),
            value_off: false.into(),
            description: Some(attr.description),
        },
        _ => Expose::Numeric {
            name: attr.name,
            access: ACCESS_ALL,
            unit: attr.unit,
            value_min: attr.min,
            value_max: attr.max,
            description: attr.description,
        },
    }
}

/// Occupancy, button actions and every configuration field
#[must_use]
pub fn exposes() -> Vec<Expose> {
    let mut list = vec![
        Expose::Binary {
            name: "occupancy",
            access: ACCESS_STATE,
            value_on: true.into(),
            value_off: false.into(),
            description: Some("Indicates whether the device detected occupancy"),
        },
        Expose::Enum {
            name: "action",
            access: ACCESS_STATE,
            values: vec!["on", "off", "toggle"],
        },
    ];
    list.extend(registry::ATTRIBUTES.iter().map(config_expose));
    list
}
