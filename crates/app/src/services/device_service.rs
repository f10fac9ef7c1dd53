//! Device service — use-cases for listing and powering PoE devices.

use poegate_domain::device::Device;
use poegate_domain::error::{NotFoundError, PoeGateError};
use poegate_domain::id::DeviceId;
use poegate_domain::power::PowerState;

use crate::ports::PowerController;

/// Application service for device queries and power toggles.
pub struct DeviceService<P> {
    controller: P,
}

impl<P: PowerController> DeviceService<P> {
    /// Create a new service backed by the given power controller.
    pub fn new(controller: P) -> Self {
        Self { controller }
    }

    /// List all devices in the order the controller reports them.
    ///
    /// # Errors
    ///
    /// Returns a tool error propagated from the controller.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<Vec<Device>, PoeGateError> {
        let devices = self.controller.list_devices().await?;
        tracing::debug!(count = devices.len(), "devices listed");
        Ok(devices)
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PoeGateError::NotFound`] when the controller does not know
    /// `id`, or a tool error from the controller.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, PoeGateError> {
        self.controller.query_device(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Supply power to a device.
    ///
    /// # Errors
    ///
    /// Returns a tool error propagated from the controller.
    pub async fn power_on(&self, id: DeviceId) -> Result<(), PoeGateError> {
        self.set_power(id, PowerState::On).await
    }

    /// Cut power to a device.
    ///
    /// # Errors
    ///
    /// Returns a tool error propagated from the controller.
    pub async fn power_off(&self, id: DeviceId) -> Result<(), PoeGateError> {
        self.set_power(id, PowerState::Off).await
    }

    /// Switch a device to the given power state.
    ///
    /// # Errors
    ///
    /// Returns a tool error propagated from the controller.
    #[tracing::instrument(skip(self))]
    pub async fn set_power(&self, id: DeviceId, state: PowerState) -> Result<(), PoeGateError> {
        self.controller.set_power(id, state).await?;
        tracing::info!(device_id = %id, %state, "power switched");
        Ok(())
    }
}
