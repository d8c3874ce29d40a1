//! In-process store honouring the same contract as the SeaORM adapter:
//! identifier and unique-attribute conflicts, idempotent delete, filters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use models::{customer, product, service, vendor};
use uuid::Uuid;

use super::{assign_id, Ready, Record, Store};
use crate::errors::ServiceError;

type Table<R> = Mutex<HashMap<Uuid, R>>;

/// Access to the table holding records of type `R`.
pub trait MemoryTable<R> {
    fn table(&self) -> &Table<R>;
}

/// Simple in-memory store for tests and doc examples.
///
/// # Examples
/// ```
/// use service::store::{memory::MemoryStore, NoFilter, Store};
/// use models::vendor;
/// let store = MemoryStore::default();
/// let acme = vendor::Model {
///     vendor_id: uuid::Uuid::nil(),
///     name: "Acme".into(),
///     contact: None,
///     phone: None,
///     email: None,
///     address: None,
/// };
/// let created = tokio_test::block_on(Store::<vendor::Model>::create(&store, acme)).unwrap();
/// assert!(!created.vendor_id.is_nil());
/// let all = tokio_test::block_on(Store::<vendor::Model>::list(&store, &NoFilter {})).unwrap();
/// assert_eq!(all, vec![created]);
/// ```
#[derive(Default)]
pub struct MemoryStore {
    customers: Table<customer::Model>,
    products: Table<product::Model>,
    services: Table<service::Model>,
    vendors: Table<vendor::Model>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Number of store operations attempted so far (probes excluded).
    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

    /// Simulate lost connectivity: every operation fails as internal and
    /// the readiness probe reports false.
    pub fn set_offline(&self, offline: bool) { self.offline.store(offline, Ordering::SeqCst); }

    fn begin(&self) -> Result<(), ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Internal("connection refused".into()));
        }
        Ok(())
    }

    fn rows<R>(&self) -> MutexGuard<'_, HashMap<Uuid, R>>
    where
        Self: MemoryTable<R>,
    {
        <Self as MemoryTable<R>>::table(self).lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoryTable<customer::Model> for MemoryStore {
    fn table(&self) -> &Table<customer::Model> { &self.customers }
}

impl MemoryTable<product::Model> for MemoryStore {
    fn table(&self) -> &Table<product::Model> { &self.products }
}

impl MemoryTable<service::Model> for MemoryStore {
    fn table(&self) -> &Table<service::Model> { &self.services }
}

impl MemoryTable<vendor::Model> for MemoryStore {
    fn table(&self) -> &Table<vendor::Model> { &self.vendors }
}

/// Detail message when another row already holds `record`'s unique attribute.
fn unique_clash<R: Record>(rows: &HashMap<Uuid, R>, record: &R) -> Option<String> {
    let (field, value) = record.unique_attribute()?;
    let taken = rows
        .values()
        .filter(|other| other.id() != record.id())
        .any(|other| other.unique_attribute().is_some_and(|(_, v)| v == value));
    taken.then(|| format!("Key ({field})=({value}) already exists."))
}

#[async_trait]
impl<R: Record> Store<R> for MemoryStore
where
    Self: MemoryTable<R>,
{
    async fn list(&self, filter: &R::Filter) -> Result<Vec<R>, ServiceError> {
        self.begin()?;
        let rows = self.rows::<R>();
        Ok(rows.values().filter(|r| r.matches(filter)).cloned().collect())
    }

    async fn create(&self, mut record: R) -> Result<R, ServiceError> {
        self.begin()?;
        assign_id(&mut record);
        let mut rows = self.rows::<R>();
        let id = record.id();
        if rows.contains_key(&id) {
            return Err(ServiceError::conflict(R::KIND, format!("Key (id)=({id}) already exists.")));
        }
        if let Some(detail) = unique_clash(&rows, &record) {
            return Err(ServiceError::conflict(R::KIND, detail));
        }
        rows.insert(id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<R, ServiceError> {
        self.begin()?;
        self.rows::<R>().get(&id).cloned().ok_or_else(|| ServiceError::not_found(R::KIND))
    }

    async fn update(&self, record: R) -> Result<R, ServiceError> {
        self.begin()?;
        let mut rows = self.rows::<R>();
        if !rows.contains_key(&record.id()) {
            return Err(ServiceError::not_found(R::KIND));
        }
        if let Some(detail) = unique_clash(&rows, &record) {
            return Err(ServiceError::conflict(R::KIND, detail));
        }
        rows.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.begin()?;
        self.rows::<R>().remove(&id);
        Ok(())
    }
}

#[async_trait]
impl Ready for MemoryStore {
    async fn ready(&self) -> bool { !self.offline.load(Ordering::SeqCst) }
}
