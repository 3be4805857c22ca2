//! SurrealDB implementation of [`PartnerUserRepository`].

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::partner_user::{CreatePartnerUser, PartnerUser};
use pantry_core::repository::PartnerUserRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::ensure_in_organization;
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct PartnerUserRow {
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

/// SurrealDB implementation of the PartnerUser repository.
#[derive(Clone)]
pub struct SurrealPartnerUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealPartnerUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> PartnerUserRepository for SurrealPartnerUserRepository<C> {
    async fn create(&self, input: CreatePartnerUser) -> PantryResult<PartnerUser> {
        ensure_in_organization(&self.db, "partner", input.partner_id, input.organization_id)
            .await?;

        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('partner_user', $id) SET \
                 organization_id = $organization_id, \
                 partner_id = $partner_id, \
                 name = $name, email = $email",
            )
            .bind(("id", id_str.clone()))
            .bind(("organization_id", input.organization_id.to_string()))
            .bind(("partner_id", input.partner_id.to_string()))
            .bind(("name", input.name))
            .bind(("email", input.email))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<PartnerUserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "partner_user".into(),
            id: id_str,
        })?;

        Ok(PartnerUser {
            id,
            organization_id: input.organization_id,
            partner_id: input.partner_id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        })
    }
}
