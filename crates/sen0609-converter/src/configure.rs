//! Join-time device configuration

use crate::error::ConverterError;
use crate::fingerprint::SENSOR_ENDPOINT;
use crate::registry;
use crate::transport::ZclDevice;
use serde::{Deserialize, Serialize};
use zigbee_core::cluster::{id, occupancy_attrs};
use zigbee_core::DataType;

/// A standing attribute reporting instruction for the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportingSubscription {
    pub cluster_id: u16,
    pub attribute_id: u16,
    pub data_type: DataType,
    /// Seconds; 0 reports every change immediately
    pub min_interval: u16,
    /// Seconds between reports when nothing changes
    pub max_interval: u16,
    pub reportable_change: u16,
}

/// Tunables for the join-time configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigureOptions {
    /// Device endpoint hosting the occupancy cluster
    pub endpoint: u8,
    /// Coordinator endpoint that receives reports
    pub coordinator_endpoint: u8,
    pub report_min_interval: u16,
    pub report_max_interval: u16,
    pub reportable_change: u16,
}

impl Default for ConfigureOptions {
    fn default() -> Self {
        Self {
            endpoint: SENSOR_ENDPOINT,
            coordinator_endpoint: 1,
            report_min_interval: 0,
            report_max_interval: 300,
            reportable_change: 1,
        }
    }
}

impl ConfigureOptions {
    /// Defaults, overridden by `SEN0609_*` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut options = Self {
            endpoint: parse_var(&lookup, "SEN0609_ENDPOINT", defaults.endpoint),
            coordinator_endpoint: parse_var(
                &lookup,
                "SEN0609_COORDINATOR_ENDPOINT",
                defaults.coordinator_endpoint,
            ),
            report_min_interval: parse_var(
                &lookup,
                "SEN0609_REPORT_MIN_INTERVAL",
                defaults.report_min_interval,
            ),
            report_max_interval: parse_var(
                &lookup,
                "SEN0609_REPORT_MAX_INTERVAL",
                defaults.report_max_interval,
            ),
            reportable_change: parse_var(
                &lookup,
                "SEN0609_REPORTABLE_CHANGE",
                defaults.reportable_change,
            ),
        };

        if options.report_min_interval > options.report_max_interval {
            tracing::warn!(
                "Ignoring reporting intervals min={}s above max={}s, using {}s..{}s",
                options.report_min_interval,
                options.report_max_interval,
                defaults.report_min_interval,
                defaults.report_max_interval
            );
            options.report_min_interval = defaults.report_min_interval;
            options.report_max_interval = defaults.report_max_interval;
        }
        options
    }

    /// Reporting subscription for the occupancy attribute
    #[must_use]
    pub fn occupancy_subscription(&self) -> ReportingSubscription {
        ReportingSubscription {
            cluster_id: id::OCCUPANCY_SENSING,
            attribute_id: occupancy_attrs::OCCUPANCY,
            data_type: DataType::Bitmap8,
            min_interval: self.report_min_interval,
            max_interval: self.report_max_interval,
            reportable_change: self.reportable_change,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            default
        }),
        None => default,
    }
}

/// Configure a freshly paired sensor
///
/// Binds the occupancy cluster, subscribes to occupancy reports and reads
/// every vendor attribute, strictly in that order. The first failure aborts
/// the run; running it again is safe.
pub async fn configure(
    device: &dyn ZclDevice,
    options: &ConfigureOptions,
) -> Result<(), ConverterError> {
    let endpoint = device
        .endpoint(options.endpoint)
        .ok_or(ConverterError::MissingEndpoint(options.endpoint))?;

    tracing::info!(
        "Binding occupancy cluster on endpoint {} to coordinator endpoint {}",
        endpoint.id(),
        options.coordinator_endpoint
    );
    endpoint
        .bind(id::OCCUPANCY_SENSING, options.coordinator_endpoint)
        .await?;

    let subscription = options.occupancy_subscription();
    tracing::info!(
        "Configuring occupancy reporting: min={}s max={}s change={}",
        subscription.min_interval,
        subscription.max_interval,
        subscription.reportable_change
    );
    endpoint
        .configure_reporting(id::OCCUPANCY_SENSING, &[subscription])
        .await?;

    let ids: Vec<u16> = registry::wire_ids().collect();
    tracing::info!("Reading {} vendor attributes: {:04x?}", ids.len(), ids);
    endpoint.read(id::OCCUPANCY_SENSING, &ids).await?;

    Ok(())
}
