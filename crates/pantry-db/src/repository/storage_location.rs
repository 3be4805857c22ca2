//! SurrealDB implementation of [`StorageLocationRepository`].

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::storage_location::{CreateStorageLocation, StorageLocation};
use pantry_core::repository::StorageLocationRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct StorageLocationRow {
    name: String,
    address: Option<String>,
    created_at: DateTime<Utc>,
}

/// SurrealDB implementation of the StorageLocation repository.
#[derive(Clone)]
pub struct SurrealStorageLocationRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealStorageLocationRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> StorageLocationRepository for SurrealStorageLocationRepository<C> {
    async fn create(&self, input: CreateStorageLocation) -> PantryResult<StorageLocation> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('storage_location', $id) SET \
                 organization_id = $organization_id, \
                 name = $name, address = $address",
            )
            .bind(("id", id_str.clone()))
            .bind(("organization_id", input.organization_id.to_string()))
            .bind(("name", input.name))
            .bind(("address", input.address))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<StorageLocationRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "storage_location".into(),
            id: id_str,
        })?;

        Ok(StorageLocation {
            id,
            organization_id: input.organization_id,
            name: row.name,
            address: row.address,
            created_at: row.created_at,
        })
    }
}
