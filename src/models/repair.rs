use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The JSON input for `POST /repair`
#[derive(Debug, Deserialize)]
pub(crate) struct NewRepairInput {
    pub(crate) shop: String,
    pub(crate) work_description: String,
    pub(crate) parts_cost: i32,
    pub(crate) labor_cost: i32,
    pub(crate) labor_hours: f64,
    pub(crate) date: NaiveDate,
    pub(crate) vehicle_id: i32,
}

/// A repair as returned by the API
#[derive(Debug, Serialize)]
pub(crate) struct RepairResponse {
    pub(crate) id: i32,
    pub(crate) shop: String,
    pub(crate) work_description: String,
    pub(crate) parts_cost: i32,
    pub(crate) labor_cost: i32,
    pub(crate) labor_hours: f64,
    pub(crate) date: NaiveDate,
    pub(crate) vehicle_id: i32,
}

impl From<entity::repair::Model> for RepairResponse {
    fn from(repair: entity::repair::Model) -> Self {
        Self {
            id: repair.id,
            shop: repair.shop,
            work_description: repair.work_description,
            parts_cost: repair.parts_cost,
            labor_cost: repair.labor_cost,
            labor_hours: repair.labor_hours,
            date: repair.date,
            vehicle_id: repair.vehicle_id,
        }
    }
}
