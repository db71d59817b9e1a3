//! Helpers shared by the unit tests: an in-memory store and an in-process client.
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use sea_orm::ConnectOptions;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::db;
use crate::models::{NewRepairInput, NewVehicleInput};
use crate::server::{router, State};
use crate::store::Store;

/// A fresh store backed by a private in-memory SQLite database.
pub(crate) async fn memory_store() -> Store {
    // one long-lived connection, or the in-memory database vanishes
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = db::connect(options).await.unwrap();
    db::setup_schema(&db).await.unwrap();
    Store::new(db)
}

pub(crate) async fn test_app() -> Router {
    router(State::new(memory_store().await))
}

/// Send one request through the router and decode the reply.
///
/// Bodies that are not JSON come back as a JSON string.
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

pub(crate) fn vehicle_json() -> Value {
    json!({
        "year": 2012,
        "make": "Honda",
        "model": "Civic",
        "purchase_price": 4000,
        "list_price": 6500,
        "sale_price": 6000,
        "miles": 120000,
        "purchase_location": "Auction",
        "purchase_date": "2021-03-04",
        "sold_date": null,
        "sold": false,
        "user_id": null
    })
}

pub(crate) fn repair_json(vehicle_id: &Value) -> Value {
    json!({
        "shop": "Joe's Garage",
        "work_description": "Front brakes",
        "parts_cost": 120,
        "labor_cost": 200,
        "labor_hours": 2.5,
        "date": "2021-04-01",
        "vehicle_id": vehicle_id
    })
}

pub(crate) fn sample_vehicle(user_id: Option<i32>) -> NewVehicleInput {
    NewVehicleInput {
        year: 2012,
        make: "Honda".into(),
        model: "Civic".into(),
        purchase_price: 4000,
        list_price: 6500,
        sale_price: 6000,
        miles: 120000,
        purchase_location: "Auction".into(),
        purchase_date: NaiveDate::from_ymd_opt(2021, 3, 4).unwrap(),
        sold_date: None,
        sold: false,
        user_id,
    }
}

pub(crate) fn sample_repair(vehicle_id: i32) -> NewRepairInput {
    NewRepairInput {
        shop: "Joe's Garage".into(),
        work_description: "Front brakes".into(),
        parts_cost: 120,
        labor_cost: 200,
        labor_hours: 2.5,
        date: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
        vehicle_id,
    }
}
