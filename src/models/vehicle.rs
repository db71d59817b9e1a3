use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The JSON input for `POST /vehicle`
///
/// `sold_date` and `user_id` may be null or left out; everything else is required.
#[derive(Debug, Deserialize)]
pub(crate) struct NewVehicleInput {
    pub(crate) year: i32,
    pub(crate) make: String,
    pub(crate) model: String,
    pub(crate) purchase_price: i32,
    pub(crate) list_price: i32,
    pub(crate) sale_price: i32,
    pub(crate) miles: i32,
    pub(crate) purchase_location: String,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) sold_date: Option<NaiveDate>,
    pub(crate) sold: bool,
    pub(crate) user_id: Option<i32>,
}

/// A vehicle as returned by the API
#[derive(Debug, Serialize)]
pub(crate) struct VehicleResponse {
    pub(crate) id: i32,
    pub(crate) year: i32,
    pub(crate) make: String,
    pub(crate) model: String,
    pub(crate) purchase_price: i32,
    pub(crate) list_price: i32,
    pub(crate) sale_price: i32,
    pub(crate) miles: i32,
    pub(crate) purchase_location: String,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) sold_date: Option<NaiveDate>,
    pub(crate) sold: bool,
    pub(crate) user_id: Option<i32>,
}

impl From<entity::vehicle::Model> for VehicleResponse {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            year: vehicle.year,
            make: vehicle.make,
            model: vehicle.model,
            purchase_price: vehicle.purchase_price,
            list_price: vehicle.list_price,
            sale_price: vehicle.sale_price,
            miles: vehicle.miles,
            purchase_location: vehicle.purchase_location,
            purchase_date: vehicle.purchase_date,
            sold_date: vehicle.sold_date,
            sold: vehicle.sold,
            user_id: vehicle.user_id,
        }
    }
}
