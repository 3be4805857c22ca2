//! SurrealDB implementation of [`DonationSiteRepository`].

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::donation_site::{CreateDonationSite, DonationSite};
use pantry_core::repository::DonationSiteRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct DonationSiteRow {
    name: String,
    address: Option<String>,
    created_at: DateTime<Utc>,
}

/// SurrealDB implementation of the DonationSite repository.
#[derive(Clone)]
pub struct SurrealDonationSiteRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealDonationSiteRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> DonationSiteRepository for SurrealDonationSiteRepository<C> {
    async fn create(&self, input: CreateDonationSite) -> PantryResult<DonationSite> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('donation_site', $id) SET \
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

        let rows: Vec<DonationSiteRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "donation_site".into(),
            id: id_str,
        })?;

        Ok(DonationSite {
            id,
            organization_id: input.organization_id,
            name: row.name,
            address: row.address,
            created_at: row.created_at,
        })
    }
}
