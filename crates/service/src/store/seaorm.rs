//! SeaORM adapter: each operation is a single statement against the pool.

use async_trait::async_trait;
use models::{customer, product, service, vendor};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, Select, Statement,
};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{assign_id, Criterion, CustomerFilter, NoFilter, ProductFilter, Ready, Record, Store};
use crate::errors::ServiceError;

/// Store backed by a pooled `DatabaseConnection`.
#[derive(Debug)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Give the connection back, e.g. to inspect a mock transaction log.
    pub fn into_inner(self) -> DatabaseConnection { self.db }
}

/// Turn a list filter into a query, or `None` when nothing can match.
trait ListSelect<E: EntityTrait> {
    fn select(&self) -> Option<Select<E>>;
}

impl ListSelect<customer::Entity> for CustomerFilter {
    fn select(&self) -> Option<Select<customer::Entity>> {
        let query = customer::Entity::find();
        match self.criterion() {
            Criterion::Any => Some(query),
            Criterion::Eq(email) => Some(query.filter(customer::Column::Email.eq(email))),
            Criterion::Nothing => None,
        }
    }
}

impl ListSelect<product::Entity> for ProductFilter {
    fn select(&self) -> Option<Select<product::Entity>> {
        let query = product::Entity::find();
        match self.criterion() {
            Criterion::Any => Some(query),
            Criterion::Eq(vendor_id) => Some(query.filter(product::Column::VendorId.eq(vendor_id))),
            Criterion::Nothing => None,
        }
    }
}

impl ListSelect<service::Entity> for NoFilter {
    fn select(&self) -> Option<Select<service::Entity>> { Some(service::Entity::find()) }
}

impl ListSelect<vendor::Entity> for NoFilter {
    fn select(&self) -> Option<Select<vendor::Entity>> { Some(vendor::Entity::find()) }
}

/// Generate the `Store` impl for entity modules that expose `Entity`,
/// `Model` and `ActiveModel`.
macro_rules! impl_seaorm_store {
    ($($entity:ident),+ $(,)?) => {$(
        #[async_trait]
        impl Store<$entity::Model> for SeaOrmStore {
            #[instrument(skip(self), fields(entity = <$entity::Model as Record>::KIND))]
            async fn list(
                &self,
                filter: &<$entity::Model as Record>::Filter,
            ) -> Result<Vec<$entity::Model>, ServiceError> {
                let kind = <$entity::Model as Record>::KIND;
                let Some(query) = ListSelect::<$entity::Entity>::select(filter) else {
                    debug!("filter cannot match any row; query skipped");
                    return Ok(Vec::new());
                };
                query.all(&self.db).await.map_err(|e| ServiceError::from_db(kind, e))
            }

            #[instrument(skip(self, record), fields(entity = <$entity::Model as Record>::KIND))]
            async fn create(&self, mut record: $entity::Model) -> Result<$entity::Model, ServiceError> {
                let kind = <$entity::Model as Record>::KIND;
                assign_id(&mut record);
                let created = record
                    .into_active_model()
                    .reset_all()
                    .insert(&self.db)
                    .await
                    .map_err(|e| ServiceError::from_db(kind, e))?;
                debug!(id = %created.id(), "row inserted");
                Ok(created)
            }

            #[instrument(skip(self), fields(entity = <$entity::Model as Record>::KIND))]
            async fn get(&self, id: Uuid) -> Result<$entity::Model, ServiceError> {
                let kind = <$entity::Model as Record>::KIND;
                $entity::Entity::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(|e| ServiceError::from_db(kind, e))?
                    .ok_or_else(|| ServiceError::not_found(kind))
            }

            #[instrument(skip(self, record), fields(entity = <$entity::Model as Record>::KIND, id = %record.id()))]
            async fn update(&self, record: $entity::Model) -> Result<$entity::Model, ServiceError> {
                let kind = <$entity::Model as Record>::KIND;
                // No matching row surfaces as RecordNotUpdated.
                record
                    .into_active_model()
                    .reset_all()
                    .update(&self.db)
                    .await
                    .map_err(|e| ServiceError::from_db(kind, e))
            }

            #[instrument(skip(self), fields(entity = <$entity::Model as Record>::KIND))]
            async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
                let kind = <$entity::Model as Record>::KIND;
                let res = $entity::Entity::delete_by_id(id)
                    .exec(&self.db)
                    .await
                    .map_err(|e| ServiceError::from_db(kind, e))?;
                debug!(rows_affected = res.rows_affected, "delete executed");
                Ok(())
            }
        }
    )+};
}

impl_seaorm_store!(customer, product, service, vendor);

#[async_trait]
impl Ready for SeaOrmStore {
    async fn ready(&self) -> bool {
        let stmt = Statement::from_string(self.db.get_database_backend(), "SELECT 1 AS ready");
        match self.db.query_one(stmt).await {
            Ok(Some(row)) => matches!(row.try_get::<i32>("", "ready"), Ok(1)),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "readiness query failed");
                false
            }
        }
    }
}
