//! SurrealDB implementation of [`DashboardSource`].
//!
//! Every query is filtered by `organization_id`. Foreign keys are plain
//! strings, so names are joined in memory from per-organization lookup
//! tables; a row pointing outside the organization is skipped.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::partner::PartnerStatus;
use pantry_core::models::request::RequestStatus;
use pantry_core::source::{
    DashboardSource, InventoryLevel, OrganizationCounts, PartnerRecord, RequestRecord,
};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::warn;
use uuid::Uuid;

use crate::error::DbError;
use crate::repository::{CountRow, parse_id};

#[derive(Debug, SurrealValue)]
struct SumRow {
    total: i64,
}

#[derive(Debug, SurrealValue)]
struct NamedRow {
    record_id: String,
    name: String,
}

#[derive(Debug, SurrealValue)]
struct ItemThresholdRow {
    record_id: String,
    name: String,
    on_hand_minimum_quantity: i64,
    on_hand_recommended_quantity: i64,
}

#[derive(Debug, SurrealValue)]
struct InventoryRow {
    record_id: String,
    storage_location_id: String,
    item_id: String,
    quantity: i64,
    // Selected because SurrealDB only orders by projected fields.
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct RequestRow {
    record_id: String,
    partner_id: String,
    partner_user_id: Option<String>,
    status: String,
    comments: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct PartnerRow {
    record_id: String,
    name: String,
    status: String,
    primary_contact_name: String,
    primary_contact_email: String,
    // Selected for `ORDER BY created_at`; not read.
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

/// Build an id -> name lookup table from `(record_id, name)` rows.
fn name_index(
    entity: &'static str,
    rows: Vec<NamedRow>,
) -> Result<HashMap<Uuid, String>, DbError> {
    rows.into_iter()
        .map(|row| Ok((parse_id(entity, &row.record_id)?, row.name)))
        .collect()
}

fn first_total(rows: &[CountRow]) -> i64 {
    rows.first()
        .map(|r| i64::try_from(r.total).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Read side of the dashboard, backed by SurrealDB.
#[derive(Clone)]
pub struct SurrealDashboardSource<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealDashboardSource<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> DashboardSource for SurrealDashboardSource<C> {
    async fn organization_counts(&self, organization_id: Uuid) -> PantryResult<OrganizationCounts> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM partner \
                 WHERE organization_id = $organization_id GROUP ALL; \
                 SELECT count() AS total FROM storage_location \
                 WHERE organization_id = $organization_id GROUP ALL; \
                 SELECT count() AS total FROM donation_site \
                 WHERE organization_id = $organization_id GROUP ALL; \
                 SELECT math::sum(quantity) AS total FROM inventory_item \
                 WHERE organization_id = $organization_id GROUP ALL;",
            )
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let partners: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        let storage_locations: Vec<CountRow> = result.take(1).map_err(DbError::from)?;
        let donation_sites: Vec<CountRow> = result.take(2).map_err(DbError::from)?;
        let inventory: Vec<SumRow> = result.take(3).map_err(DbError::from)?;

        Ok(OrganizationCounts {
            partner_count: first_total(&partners),
            storage_location_count: first_total(&storage_locations),
            donation_site_count: first_total(&donation_sites),
            total_inventory_units: inventory.first().map(|r| r.total).unwrap_or(0),
        })
    }

    async fn inventory_levels(&self, organization_id: Uuid) -> PantryResult<Vec<InventoryLevel>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, name FROM storage_location \
                 WHERE organization_id = $organization_id; \
                 SELECT meta::id(id) AS record_id, name, \
                 on_hand_minimum_quantity, on_hand_recommended_quantity \
                 FROM item WHERE organization_id = $organization_id; \
                 SELECT meta::id(id) AS record_id, storage_location_id, \
                 item_id, quantity, created_at FROM inventory_item \
                 WHERE organization_id = $organization_id \
                 ORDER BY created_at ASC;",
            )
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let locations: Vec<NamedRow> = result.take(0).map_err(DbError::from)?;
        let items: Vec<ItemThresholdRow> = result.take(1).map_err(DbError::from)?;
        let inventory: Vec<InventoryRow> = result.take(2).map_err(DbError::from)?;

        let locations = name_index("storage_location", locations)?;
        let items = items
            .into_iter()
            .map(|row| Ok((parse_id("item", &row.record_id)?, row)))
            .collect::<Result<HashMap<_, _>, DbError>>()?;

        let mut levels = Vec::with_capacity(inventory.len());
        for row in inventory {
            let storage_location_id = parse_id("inventory_item", &row.storage_location_id)?;
            let item_id = parse_id("inventory_item", &row.item_id)?;

            let (Some(location_name), Some(item)) =
                (locations.get(&storage_location_id), items.get(&item_id))
            else {
                warn!(
                    %organization_id,
                    inventory_item = %row.record_id,
                    "Skipping inventory row with a dangling storage location or item"
                );
                continue;
            };

            levels.push(InventoryLevel {
                storage_location_id,
                storage_location_name: location_name.clone(),
                item_id,
                item_name: item.name.clone(),
                quantity: row.quantity,
                minimum: item.on_hand_minimum_quantity,
                recommended: item.on_hand_recommended_quantity,
            });
        }

        Ok(levels)
    }

    async fn requests(&self, organization_id: Uuid) -> PantryResult<Vec<RequestRecord>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, partner_id, partner_user_id, \
                 status, comments, created_at FROM request \
                 WHERE organization_id = $organization_id; \
                 SELECT meta::id(id) AS record_id, name FROM partner \
                 WHERE organization_id = $organization_id; \
                 SELECT meta::id(id) AS record_id, name FROM partner_user \
                 WHERE organization_id = $organization_id;",
            )
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let requests: Vec<RequestRow> = result.take(0).map_err(DbError::from)?;
        let partners: Vec<NamedRow> = result.take(1).map_err(DbError::from)?;
        let users: Vec<NamedRow> = result.take(2).map_err(DbError::from)?;

        let partners = name_index("partner", partners)?;
        let users = name_index("partner_user", users)?;

        let mut records = Vec::with_capacity(requests.len());
        for row in requests {
            let id = parse_id("request", &row.record_id)?;
            let partner_id = parse_id("request", &row.partner_id)?;

            let Some(partner_name) = partners.get(&partner_id) else {
                warn!(
                    %organization_id,
                    request_id = %id,
                    "Skipping request whose partner is outside the organization"
                );
                continue;
            };

            let requester_name = match row.partner_user_id.as_deref() {
                Some(raw) => users.get(&parse_id("request", raw)?).cloned(),
                None => None,
            };

            records.push(RequestRecord {
                id,
                status: RequestStatus::from_stored(&row.status),
                created_at: row.created_at,
                partner_id,
                partner_name: partner_name.clone(),
                requester_name,
                comments: row.comments,
            });
        }

        Ok(records)
    }

    async fn partners(&self, organization_id: Uuid) -> PantryResult<Vec<PartnerRecord>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, name, status, \
                 primary_contact_name, primary_contact_email, created_at \
                 FROM partner WHERE organization_id = $organization_id \
                 ORDER BY created_at ASC",
            )
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PartnerRow> = result.take(0).map_err(DbError::from)?;

        let records = rows
            .into_iter()
            .map(|row| {
                Ok(PartnerRecord {
                    id: parse_id("partner", &row.record_id)?,
                    status: PartnerStatus::from_stored(&row.status),
                    name: row.name,
                    email: row.primary_contact_email,
                    contact_name: row.primary_contact_name,
                })
            })
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(records)
    }
}
