//! Partner user domain model.
//!
//! A partner user is a person at a partner agency who submits requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerUser {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub partner_id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePartnerUser {
    pub organization_id: Uuid,
    pub partner_id: Uuid,
    pub name: String,
    pub email: String,
}
