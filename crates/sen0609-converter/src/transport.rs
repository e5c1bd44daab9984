//! Transport seam implemented by the host's Zigbee stack

use crate::configure::ReportingSubscription;
use crate::encode::AttributeWrite;
use crate::error::TransportError;
use async_trait::async_trait;

/// A device endpoint the host can send ZCL requests to
///
/// Each call completes when the transport has the device's answer (or gave
/// up); timeouts are the transport's business.
#[async_trait]
pub trait ZclEndpoint: Send + Sync {
    /// Endpoint number on the device
    fn id(&self) -> u8;

    /// Bind `cluster_id` on this endpoint to the coordinator endpoint
    async fn bind(&self, cluster_id: u16, coordinator_endpoint: u8) -> Result<(), TransportError>;

    /// Send a Configure Reporting command
    async fn configure_reporting(
        &self,
        cluster_id: u16,
        subscriptions: &[ReportingSubscription],
    ) -> Result<(), TransportError>;

    /// Send a Read Attributes command; values arrive later as a read response
    async fn read(&self, cluster_id: u16, attribute_ids: &[u16]) -> Result<(), TransportError>;

    /// Send a Write Attributes command
    async fn write(&self, cluster_id: u16, writes: &[AttributeWrite]) -> Result<(), TransportError>;
}

/// A paired device exposing its endpoints
pub trait ZclDevice: Send + Sync {
    fn endpoint(&self, id: u8) -> Option<&dyn ZclEndpoint>;
}
