//! SurrealDB repository implementations.

mod donation_site;
mod inventory_item;
mod item;
mod organization;
mod partner;
mod partner_user;
mod request;
mod storage_location;

pub use donation_site::SurrealDonationSiteRepository;
pub use inventory_item::SurrealInventoryItemRepository;
pub use item::SurrealItemRepository;
pub use organization::SurrealOrganizationRepository;
pub use partner::SurrealPartnerRepository;
pub use partner_user::SurrealPartnerUserRepository;
pub use request::SurrealRequestRepository;
pub use storage_location::SurrealStorageLocationRepository;

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
pub(crate) struct CountRow {
    pub(crate) total: u64,
}

/// Parse a UUID stored as a string in `entity`.
pub(crate) fn parse_id(entity: &'static str, raw: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(raw).map_err(|e| DbError::invalid_uuid(entity, e))
}

/// Fail with `NotFound` unless record `id` of `table` belongs to the
/// organization.
pub(crate) async fn ensure_in_organization<C: Connection>(
    db: &Surreal<C>,
    table: &'static str,
    id: Uuid,
    organization_id: Uuid,
) -> Result<(), DbError> {
    let id_str = id.to_string();
    let query = format!(
        "SELECT count() AS total FROM {table} \
         WHERE id = type::record('{table}', $id) \
         AND organization_id = $organization_id GROUP ALL"
    );

    let mut result = db
        .query(query)
        .bind(("id", id_str.clone()))
        .bind(("organization_id", organization_id.to_string()))
        .await?;

    let rows: Vec<CountRow> = result.take(0)?;
    if rows.first().map(|r| r.total).unwrap_or(0) == 0 {
        return Err(DbError::NotFound {
            entity: table.into(),
            id: id_str,
        });
    }

    Ok(())
}
