//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Router;
use axum::routing::{get, post};

use poegate_app::ports::PowerController;

use crate::state::AppState;

/// Build the device sub-router.
pub fn routes<P>() -> Router<AppState<P>>
where
    P: PowerController + 'static,
{
    Router::new()
        .route("/device", get(devices::list::<P>))
        .route("/device/{id}", get(devices::get::<P>))
        .route("/device/{id}/on", post(devices::power_on::<P>))
        .route("/device/{id}/off", post(devices::power_off::<P>))
}
