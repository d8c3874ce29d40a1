//! Data access layer for the catalogue entities.
//! - One CRUD capability set per entity kind (`store::Store`).
//! - Storage failures are classified into `errors::ServiceError`.
//! - Production adapter over SeaORM, in-memory adapter for tests.

pub mod errors;
pub mod store;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use store::{Backend, Ready, Record, Store};
