//! `SeaORM` entities for the car lot database.
//!
//! Three tables with plain one-to-many ownership: a user owns vehicles, a vehicle owns repairs.
//! Ownership is an integer column only. No foreign key constraints are declared, so children
//! may reference missing parents and are left in place when a parent is deleted.

pub mod repair;
pub mod user;
pub mod vehicle;
