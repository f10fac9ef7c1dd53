//! Power controller port — everything the gateway needs from the hardware side.
//!
//! The only production implementation shells out to a script, but the HTTP
//! layer and the services only ever see typed [`Device`] records.

use std::future::Future;

use poegate_domain::device::Device;
use poegate_domain::error::PoeGateError;
use poegate_domain::id::DeviceId;
use poegate_domain::power::PowerState;

/// Queries and toggles power on PoE ports.
pub trait PowerController: Send + Sync {
    /// List every port known to the controller, in the controller's order.
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, PoeGateError>> + Send;

    /// Query a single port. `Ok(None)` means the controller does not know `id`.
    fn query_device(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, PoeGateError>> + Send;

    /// Switch power on port `id` to `state`.
    fn set_power(
        &self,
        id: DeviceId,
        state: PowerState,
    ) -> impl Future<Output = Result<(), PoeGateError>> + Send;
}

impl<T: PowerController> PowerController for std::sync::Arc<T> {
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, PoeGateError>> + Send {
        (**self).list_devices()
    }

    fn query_device(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, PoeGateError>> + Send {
        (**self).query_device(id)
    }

    fn set_power(
        &self,
        id: DeviceId,
        state: PowerState,
    ) -> impl Future<Output = Result<(), PoeGateError>> + Send {
        (**self).set_power(id, state)
    }
}
