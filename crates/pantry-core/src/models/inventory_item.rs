//! Inventory item domain model: the on-hand quantity of one item at one
//! storage location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub storage_location_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInventoryItem {
    pub organization_id: Uuid,
    pub storage_location_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
}
