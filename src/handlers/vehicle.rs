use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;

use crate::constants::{INVENTORY_EMPTY, VEHICLES_NOT_FOUND, VEHICLE_DELETED, VEHICLE_NOT_FOUND};
use crate::error::ServerError;
use crate::handlers::JsonInput;
use crate::models::{NewVehicleInput, VehicleResponse};
use crate::server::State;

/// Handler for `POST /vehicle`
pub(crate) async fn create_vehicle(
    state: Extension<Arc<State>>,
    JsonInput(input): JsonInput<NewVehicleInput>,
) -> Result<Json<VehicleResponse>, ServerError> {
    let vehicle = state.store.create_vehicle(input).await?;
    Ok(Json(vehicle.into()))
}

/// Handler for `GET /vehicles/:user_id`
pub(crate) async fn get_vehicles(
    Path(user_id): Path<i32>,
    state: Extension<Arc<State>>,
) -> Result<Json<Vec<VehicleResponse>>, ServerError> {
    let vehicles = state.store.find_vehicles_by_user(user_id).await?;
    if vehicles.is_empty() {
        return Err(ServerError::NotFound(VEHICLES_NOT_FOUND));
    }
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// Handler for `GET /vehicles`
pub(crate) async fn get_all_vehicles(
    state: Extension<Arc<State>>,
) -> Result<Json<Vec<VehicleResponse>>, ServerError> {
    let vehicles = state.store.all_vehicles().await?;
    if vehicles.is_empty() {
        return Err(ServerError::NotFound(INVENTORY_EMPTY));
    }
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// Handler for `DELETE /vehicle/:id`
pub(crate) async fn delete_vehicle(
    Path(id): Path<i32>,
    state: Extension<Arc<State>>,
) -> Result<Json<&'static str>, ServerError> {
    if !state.store.delete_vehicle(id).await? {
        return Err(ServerError::NotFound(VEHICLE_NOT_FOUND));
    }
    Ok(Json(VEHICLE_DELETED))
}
