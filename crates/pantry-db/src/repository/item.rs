//! SurrealDB implementation of [`ItemRepository`].

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::item::{CreateItem, Item};
use pantry_core::repository::ItemRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct ItemRow {
    name: String,
    on_hand_minimum_quantity: i64,
    on_hand_recommended_quantity: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// SurrealDB implementation of the Item repository.
#[derive(Clone)]
pub struct SurrealItemRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealItemRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ItemRepository for SurrealItemRepository<C> {
    async fn create(&self, input: CreateItem) -> PantryResult<Item> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('item', $id) SET \
                 organization_id = $organization_id, name = $name, \
                 on_hand_minimum_quantity = $minimum, \
                 on_hand_recommended_quantity = $recommended",
            )
            .bind(("id", id_str.clone()))
            .bind(("organization_id", input.organization_id.to_string()))
            .bind(("name", input.name))
            .bind(("minimum", input.on_hand_minimum_quantity))
            .bind(("recommended", input.on_hand_recommended_quantity))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<ItemRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "item".into(),
            id: id_str,
        })?;

        Ok(Item {
            id,
            organization_id: input.organization_id,
            name: row.name,
            on_hand_minimum_quantity: row.on_hand_minimum_quantity,
            on_hand_recommended_quantity: row.on_hand_recommended_quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
