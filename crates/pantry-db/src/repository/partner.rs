//! SurrealDB implementation of [`PartnerRepository`].

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::partner::{CreatePartner, Partner, PartnerProfile, PartnerStatus};
use pantry_core::repository::PartnerRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::parse_id;
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct PartnerRow {
    organization_id: String,
    name: String,
    status: String,
    primary_contact_name: String,
    primary_contact_email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PartnerRow {
    fn into_partner(self, id: Uuid) -> Result<Partner, DbError> {
        Ok(Partner {
            id,
            organization_id: parse_id("partner", &self.organization_id)?,
            name: self.name,
            status: PartnerStatus::from_stored(&self.status),
            profile: PartnerProfile {
                primary_contact_name: self.primary_contact_name,
                primary_contact_email: self.primary_contact_email,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Partner repository.
#[derive(Clone)]
pub struct SurrealPartnerRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealPartnerRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> PartnerRepository for SurrealPartnerRepository<C> {
    async fn create(&self, input: CreatePartner) -> PantryResult<Partner> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('partner', $id) SET \
                 organization_id = $organization_id, \
                 name = $name, status = $status, \
                 primary_contact_name = $contact_name, \
                 primary_contact_email = $contact_email",
            )
            .bind(("id", id_str.clone()))
            .bind(("organization_id", input.organization_id.to_string()))
            .bind(("name", input.name))
            .bind(("status", input.status.as_str().to_string()))
            .bind(("contact_name", input.profile.primary_contact_name))
            .bind(("contact_email", input.profile.primary_contact_email))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<PartnerRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "partner".into(),
            id: id_str,
        })?;

        Ok(row.into_partner(id)?)
    }

    async fn get_by_id(&self, organization_id: Uuid, id: Uuid) -> PantryResult<Partner> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('partner', $id) \
                 WHERE organization_id = $organization_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PartnerRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "partner".into(),
            id: id_str,
        })?;

        Ok(row.into_partner(id)?)
    }

    async fn update_status(
        &self,
        organization_id: Uuid,
        id: Uuid,
        status: PartnerStatus,
    ) -> PantryResult<Partner> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('partner', $id) SET \
                 status = $status, updated_at = time::now() \
                 WHERE organization_id = $organization_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("status", status.as_str().to_string()))
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<PartnerRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "partner".into(),
            id: id_str,
        })?;

        Ok(row.into_partner(id)?)
    }
}
