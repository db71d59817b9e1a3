use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;

use crate::constants::{REPAIR_DELETED, REPAIR_NOT_FOUND};
use crate::error::ServerError;
use crate::handlers::JsonInput;
use crate::models::{NewRepairInput, RepairResponse};
use crate::server::State;

/// Handler for `POST /repair`
pub(crate) async fn create_repair(
    state: Extension<Arc<State>>,
    JsonInput(input): JsonInput<NewRepairInput>,
) -> Result<Json<RepairResponse>, ServerError> {
    let repair = state.store.create_repair(input).await?;
    Ok(Json(repair.into()))
}

/// Handler for `GET /repairs/:vehicle_id`
///
/// A vehicle without repairs yields an empty list.
pub(crate) async fn get_repairs(
    Path(vehicle_id): Path<i32>,
    state: Extension<Arc<State>>,
) -> Result<Json<Vec<RepairResponse>>, ServerError> {
    let repairs = state.store.find_repairs_by_vehicle(vehicle_id).await?;
    Ok(Json(repairs.into_iter().map(RepairResponse::from).collect()))
}

/// Handler for `DELETE /repair/:id`
pub(crate) async fn delete_repair(
    Path(id): Path<i32>,
    state: Extension<Arc<State>>,
) -> Result<Json<&'static str>, ServerError> {
    if !state.store.delete_repair(id).await? {
        return Err(ServerError::NotFound(REPAIR_NOT_FOUND));
    }
    Ok(Json(REPAIR_DELETED))
}
