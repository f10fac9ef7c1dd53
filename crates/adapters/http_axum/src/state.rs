//! Shared application state for axum handlers.

use std::sync::Arc;

use poegate_app::ports::PowerController;
use poegate_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the power controller to avoid dynamic dispatch.
/// `Clone` is implemented manually so the controller itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<P> {
    /// Device query and power service.
    pub device_service: Arc<DeviceService<P>>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<P> AppState<P>
where
    P: PowerController + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_service: DeviceService<P>) -> Self {
        Self {
            device_service: Arc::new(device_service),
        }
    }
}
