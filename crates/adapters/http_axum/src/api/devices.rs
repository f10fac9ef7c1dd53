//! JSON REST handlers for devices.
//!
//! Ids are extracted as `Path<u64>`, so a segment that is not a non-negative
//! integer is rejected by axum before any handler code runs.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use poegate_app::ports::PowerController;
use poegate_domain::device::Device;
use poegate_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the power endpoints.
pub enum PowerResponse {
    NoContent,
}

impl IntoResponse for PowerResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /device`
pub async fn list<P>(State(state): State<AppState<P>>) -> Result<ListResponse, ApiError>
where
    P: PowerController + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /device/{id}`
pub async fn get<P>(
    State(state): State<AppState<P>>,
    Path(id): Path<u64>,
) -> Result<GetResponse, ApiError>
where
    P: PowerController + 'static,
{
    let device = state.device_service.get_device(DeviceId::from(id)).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /device/{id}/on`
pub async fn power_on<P>(
    State(state): State<AppState<P>>,
    Path(id): Path<u64>,
) -> Result<PowerResponse, ApiError>
where
    P: PowerController + 'static,
{
    state.device_service.power_on(DeviceId::from(id)).await?;
    Ok(PowerResponse::NoContent)
}

/// `POST /device/{id}/off`
pub async fn power_off<P>(
    State(state): State<AppState<P>>,
    Path(id): Path<u64>,
) -> Result<PowerResponse, ApiError>
where
    P: PowerController + 'static,
{
    state.device_service.power_off(DeviceId::from(id)).await?;
    Ok(PowerResponse::NoContent)
}
