//! Data access contract: one capability set per entity kind, plus a
//! storage reachability probe.
//!
//! `seaorm::SeaOrmStore` is the production adapter; `memory::MemoryStore`
//! honours the same contract in process and backs the tests.

pub mod filters;
pub mod memory;
pub mod records;
pub mod seaorm;
#[cfg(test)]
mod postgres_tests;

use std::fmt::Debug;

use async_trait::async_trait;
use models::{customer, product, service, vendor};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

pub use filters::{Criterion, CustomerFilter, NoFilter, ProductFilter};

/// An entity row addressable by a UUID.
pub trait Record: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Singular name used in messages, e.g. `Vendor`.
    const KIND: &'static str;

    /// Optional equality filter accepted by `Store::list`.
    type Filter: Debug + Default + Send + Sync + DeserializeOwned + 'static;

    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Attribute (name, value) that must be unique besides the identifier.
    fn unique_attribute(&self) -> Option<(&'static str, String)> { None }
}

/// CRUD capability set for one entity kind.
#[async_trait]
pub trait Store<R: Record>: Send + Sync {
    /// All records, narrowed by `filter`. No match is an empty list.
    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, ServiceError>;

    /// Persist a new record; a nil identifier is replaced by a fresh one.
    async fn create(&self, record: R) -> Result<R, ServiceError>;

    async fn get(&self, id: Uuid) -> Result<R, ServiceError>;

    /// Replace every attribute of the record carrying `record.id()`.
    async fn update(&self, record: R) -> Result<R, ServiceError>;

    /// Remove the record; an unknown identifier is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// Storage reachability, used by the readiness probe only.
#[async_trait]
pub trait Ready: Send + Sync {
    async fn ready(&self) -> bool;
}

/// Everything the HTTP layer needs from a storage backend.
pub trait Backend:
    Store<customer::Model>
    + Store<product::Model>
    + Store<service::Model>
    + Store<vendor::Model>
    + Ready
    + 'static
{
}

impl<T> Backend for T where
    T: Store<customer::Model>
        + Store<product::Model>
        + Store<service::Model>
        + Store<vendor::Model>
        + Ready
        + 'static
{
}

/// Give the record a generated identifier unless the caller chose one.
pub fn assign_id<R: Record>(record: &mut R) {
    if record.id().is_nil() {
        record.set_id(Uuid::new_v4());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: Uuid) -> vendor::Model {
        vendor::Model { vendor_id: id, name: "Acme".into(), contact: None, phone: None, email: None, address: None }
    }

    #[test]
    fn assign_id_fills_nil() {
        let mut v = vendor(Uuid::nil());
        assign_id(&mut v);
        assert!(!v.vendor_id.is_nil());
        assert_eq!(v.vendor_id.get_version_num(), 4);
    }

    #[test]
    fn assign_id_keeps_client_choice() {
        let id = Uuid::new_v4();
        let mut v = vendor(id);
        assign_id(&mut v);
        assert_eq!(v.vendor_id, id);
    }
}
