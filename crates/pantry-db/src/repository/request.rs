//! SurrealDB implementation of [`RequestRepository`].

use chrono::{DateTime, Utc};
use pantry_core::error::PantryResult;
use pantry_core::models::request::{CreateRequest, Request, RequestStatus};
use pantry_core::repository::RequestRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{ensure_in_organization, parse_id};
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct RequestRow {
    organization_id: String,
    partner_id: String,
    partner_user_id: Option<String>,
    status: String,
    comments: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RequestRow {
    fn into_request(self, id: Uuid) -> Result<Request, DbError> {
        Ok(Request {
            id,
            organization_id: parse_id("request", &self.organization_id)?,
            partner_id: parse_id("request", &self.partner_id)?,
            partner_user_id: self
                .partner_user_id
                .as_deref()
                .map(|raw| parse_id("request", raw))
                .transpose()?,
            status: RequestStatus::from_stored(&self.status),
            comments: self.comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the Request repository.
#[derive(Clone)]
pub struct SurrealRequestRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealRequestRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> RequestRepository for SurrealRequestRepository<C> {
    async fn create(&self, input: CreateRequest) -> PantryResult<Request> {
        ensure_in_organization(&self.db, "partner", input.partner_id, input.organization_id)
            .await?;
        if let Some(partner_user_id) = input.partner_user_id {
            ensure_in_organization(
                &self.db,
                "partner_user",
                partner_user_id,
                input.organization_id,
            )
            .await?;
        }

        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let mut sets = vec![
            "organization_id = $organization_id",
            "partner_id = $partner_id",
            "partner_user_id = $partner_user_id",
            "status = $status",
            "comments = $comments",
        ];
        if input.created_at.is_some() {
            sets.push("created_at = $created_at");
        }

        let query = format!(
            "CREATE type::record('request', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self
            .db
            .query(&query)
            .bind(("id", id_str.clone()))
            .bind(("organization_id", input.organization_id.to_string()))
            .bind(("partner_id", input.partner_id.to_string()))
            .bind((
                "partner_user_id",
                input.partner_user_id.map(|id| id.to_string()),
            ))
            .bind(("status", input.status.as_str().to_string()))
            .bind(("comments", input.comments));

        if let Some(created_at) = input.created_at {
            builder = builder.bind(("created_at", created_at));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<RequestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "request".into(),
            id: id_str,
        })?;

        Ok(row.into_request(id)?)
    }

    async fn get_by_id(&self, organization_id: Uuid, id: Uuid) -> PantryResult<Request> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('request', $id) \
                 WHERE organization_id = $organization_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RequestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "request".into(),
            id: id_str,
        })?;

        Ok(row.into_request(id)?)
    }

    async fn update_status(
        &self,
        organization_id: Uuid,
        id: Uuid,
        status: RequestStatus,
    ) -> PantryResult<Request> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('request', $id) SET \
                 status = $status, updated_at = time::now() \
                 WHERE organization_id = $organization_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("status", status.as_str().to_string()))
            .bind(("organization_id", organization_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<RequestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "request".into(),
            id: id_str,
        })?;

        Ok(row.into_request(id)?)
    }
}
