//! Device — one PoE port and the host plugged into it.
//!
//! Devices are rebuilt from the power tool's output on every request; they
//! are never stored, so the only invariant worth enforcing is the shape of
//! the record itself.

use serde::Serialize;

use crate::id::DeviceId;

/// A power port as reported by the external power tool.
///
/// Serialized as `{"id": 7, "isTurnedOn": true, "hostname": "node-7"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(rename = "isTurnedOn")]
    pub powered_on: bool,
    pub hostname: String,
}

impl Device {
    /// Build a device, trimming trailing whitespace off the hostname.
    #[must_use]
    pub fn new(id: DeviceId, powered_on: bool, hostname: impl Into<String>) -> Self {
        let mut hostname = hostname.into();
        hostname.truncate(hostname.trim_end().len());
        Self {
            id,
            powered_on,
            hostname,
        }
    }
}
