//! Transport representations of the entities.
//!
//! Each response struct is the serialization allowlist for its entity: fields are emitted in
//! declaration order and relations are never embedded.

mod repair;
mod user;
mod vehicle;

pub(crate) use repair::*;
pub(crate) use user::*;
pub(crate) use vehicle::*;
