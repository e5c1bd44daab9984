//! Endpoint/cluster fingerprint used to recognize the sensor
//!
//! The SEN0609 firmware does not report a model identifier, so the device is
//! recognized by the layout of its single endpoint.

use std::collections::BTreeSet;
use zigbee_core::cluster::{id, profile};
use zigbee_core::{DeviceType, Endpoint, ZigbeeDevice};

/// Expected simple descriptor of one endpoint
#[derive(Debug, Clone)]
pub struct EndpointFingerprint {
    pub id: u8,
    pub profile_id: u16,
    pub device_id: u16,
    pub in_clusters: &'static [u16],
    pub out_clusters: &'static [u16],
}

impl EndpointFingerprint {
    /// Cluster lists are compared as sets, order and duplicates aside
    fn matches(&self, endpoint: &Endpoint) -> bool {
        endpoint.id == self.id
            && endpoint.profile_id == self.profile_id
            && endpoint.device_id == self.device_id
            && same_set(&endpoint.in_clusters, self.in_clusters)
            && same_set(&endpoint.out_clusters, self.out_clusters)
    }
}

/// Expected device role and endpoint layout
#[derive(Debug, Clone)]
pub struct Fingerprint {
    pub device_type: DeviceType,
    pub endpoints: &'static [EndpointFingerprint],
}

impl Fingerprint {
    /// True when the device has exactly the fingerprinted endpoints
    #[must_use]
    pub fn matches(&self, device: &ZigbeeDevice) -> bool {
        let matched = device.device_type == self.device_type
            && device.endpoints.len() == self.endpoints.len()
            && self.endpoints.iter().all(|expected| {
                device
                    .endpoint(expected.id)
                    .is_some_and(|ep| expected.matches(ep))
            });

        tracing::debug!(
            "Fingerprint check for {}: {}",
            device.display_name(),
            if matched { "match" } else { "no match" }
        );
        matched
    }
}

fn same_set(actual: &[u16], expected: &[u16]) -> bool {
    actual.iter().collect::<BTreeSet<_>>() == expected.iter().collect::<BTreeSet<_>>()
}

/// Endpoint hosting the sensor's clusters
pub const SENSOR_ENDPOINT: u8 = 10;

/// Fingerprint of the SEN0609 Zigbee firmware
pub static SEN0609: Fingerprint = Fingerprint {
    device_type: DeviceType::EndDevice,
    endpoints: &[EndpointFingerprint {
        id: SENSOR_ENDPOINT,
        profile_id: profile::HOME_AUTOMATION,
        device_id: 0x0000,
        in_clusters: &[
            id::BASIC,
            id::IDENTIFY,
            id::ON_OFF_SWITCH_CONFIG,
            id::OCCUPANCY_SENSING,
        ],
        out_clusters: &[id::ON_OFF, id::SCENES, id::GROUPS, id::IDENTIFY],
    }],
};

/// Whether `device` is a SEN0609 sensor
#[must_use]
pub fn matches(device: &ZigbeeDevice) -> bool {
    SEN0609.matches(device)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor() -> ZigbeeDevice {
        let mut device = ZigbeeDevice::new([1, 2, 3, 4, 5, 6, 7, 8], 0x4a2f);
        device.endpoints.push(Endpoint {
            id: 10,
            profile_id: 0x0104,
            device_id: 0x0000,
            in_clusters: vec![0x0000, 0x0003, 0x0007, 0x0406],
            out_clusters: vec![0x0006, 0x0005, 0x0004, 0x0003],
        });
        device
    }

    #[test]
    fn test_matches_sensor() {
        assert!(matches(&sensor()));
    }

    #[test]
    fn test_cluster_order_does_not_matter() {
        let mut device = sensor();
        device.endpoints[0].in_clusters.reverse();
        device.endpoints[0].out_clusters.sort_unstable();
        assert!(matches(&device));
    }

    #[test]
    fn test_inbound_superset_does_not_match() {
        let mut device = sensor();
        device.endpoints[0].in_clusters.push(0x0402);
        assert!(!matches(&device));
    }

    #[test]
    fn test_outbound_subset_does_not_match() {
        let mut device = sensor();
        device.endpoints[0].out_clusters.pop();
        assert!(!matches(&device));
    }

    #[test]
    fn test_router_does_not_match() {
        let mut device = sensor();
        device.device_type = DeviceType::Router;
        assert!(!matches(&device));
    }

    #[test]
    fn test_wrong_endpoint_or_profile_does_not_match() {
        let mut device = sensor();
        device.endpoints[0].id = 1;
        assert!(!matches(&device));

        let mut device = sensor();
        device.endpoints[0].profile_id = 0xC05E;
        assert!(!matches(&device));
    }

    #[test]
    fn test_extra_endpoint_does_not_match() {
        let mut device = sensor();
        device.endpoints.push(Endpoint {
            id: 242,
            profile_id: 0xA1E0,
            device_id: 0x0061,
            in_clusters: vec![],
            out_clusters: vec![0x0021],
        });
        assert!(!matches(&device));
    }

    #[test]
    fn test_device_without_endpoints_does_not_match() {
        let device = ZigbeeDevice::new([0; 8], 0x0001);
        assert!(!matches(&device));
    }
}
