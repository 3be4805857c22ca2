//! Organization domain model.
//!
//! An organization (an essentials bank) owns every partner, storage
//! location, donation site, item and request in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL-safe unique identifier used in dashboard links (e.g. `diaper-bank`).
    pub short_name: String,
    /// Reference to the attached logo in file storage, if any.
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrganization {
    pub name: String,
    pub short_name: String,
    pub logo: Option<String>,
}

/// Fields that can be updated on an existing organization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateOrganization {
    pub name: Option<String>,
    /// `Some(Some(val))` = attach, `Some(None)` = detach, `None` = no change.
    pub logo: Option<Option<String>>,
}
