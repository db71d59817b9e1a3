//! Constants

/// Used when `DATABASE_URL` is not set: a SQLite file next to the working directory.
pub(crate) const DEFAULT_DATABASE_URL: &str = "sqlite://app.sqlite?mode=rwc";
pub(crate) const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub(crate) const DEFAULT_LOG_FILTER: &str = "carlot_server=debug,tower_http=debug";

// not-found messages, sent back as JSON strings
pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const VEHICLES_NOT_FOUND: &str = "No vehicles found";
pub(crate) const INVENTORY_EMPTY: &str = "no inventory";
pub(crate) const VEHICLE_NOT_FOUND: &str = "Vehicle not found";
pub(crate) const REPAIR_NOT_FOUND: &str = "Repair not found";

// delete confirmations
pub(crate) const USER_DELETED: &str = "User Deleted";
pub(crate) const VEHICLE_DELETED: &str = "Vehicle Deleted";
pub(crate) const REPAIR_DELETED: &str = "Repair Deleted";
