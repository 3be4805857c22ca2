//! Item domain model.
//!
//! Items carry the on-hand thresholds the low-inventory report is
//! measured against. `on_hand_minimum_quantity <= on_hand_recommended_quantity`
//! is the expected configuration but is not enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub on_hand_minimum_quantity: i64,
    pub on_hand_recommended_quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    pub organization_id: Uuid,
    pub name: String,
    pub on_hand_minimum_quantity: i64,
    pub on_hand_recommended_quantity: i64,
}
