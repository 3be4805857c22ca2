//! SurrealDB implementation of [`InventoryItemRepository`].

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::inventory_item::{CreateInventoryItem, InventoryItem};
use pantry_core::repository::InventoryItemRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::ensure_in_organization;
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct InventoryItemRow {
    quantity: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// SurrealDB implementation of the InventoryItem repository.
#[derive(Clone)]
pub struct SurrealInventoryItemRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealInventoryItemRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> InventoryItemRepository for SurrealInventoryItemRepository<C> {
    async fn create(&self, input: CreateInventoryItem) -> PantryResult<InventoryItem> {
        ensure_in_organization(
            &self.db,
            "storage_location",
            input.storage_location_id,
            input.organization_id,
        )
        .await?;
        ensure_in_organization(&self.db, "item", input.item_id, input.organization_id).await?;

        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('inventory_item', $id) SET \
                 organization_id = $organization_id, \
                 storage_location_id = $storage_location_id, \
                 item_id = $item_id, quantity = $quantity",
            )
            .bind(("id", id_str.clone()))
            .bind(("organization_id", input.organization_id.to_string()))
            .bind(("storage_location_id", input.storage_location_id.to_string()))
            .bind(("item_id", input.item_id.to_string()))
            .bind(("quantity", input.quantity))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<InventoryItemRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "inventory_item".into(),
            id: id_str,
        })?;

        Ok(InventoryItem {
            id,
            organization_id: input.organization_id,
            storage_location_id: input.storage_location_id,
            item_id: input.item_id,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
