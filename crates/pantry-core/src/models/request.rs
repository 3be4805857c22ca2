//! Partner request domain model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Started,
    Fulfilled,
    /// Soft-deleted: kept in storage, hidden from every live view.
    Discarded,
    /// A stored value this build does not know about.
    #[serde(untagged)]
    Unrecognized(String),
}

impl RequestStatus {
    /// Parse a persisted status. Unknown values are preserved rather
    /// than rejected.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "started" => Self::Started,
            "fulfilled" => Self::Fulfilled,
            "discarded" => Self::Discarded,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Started => "started",
            Self::Fulfilled => "fulfilled",
            Self::Discarded => "discarded",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub partner_id: Uuid,
    /// The partner user who submitted the request.
    pub partner_user_id: Option<Uuid>,
    pub status: RequestStatus,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub organization_id: Uuid,
    pub partner_id: Uuid,
    pub partner_user_id: Option<Uuid>,
    pub status: RequestStatus,
    pub comments: Option<String>,
    /// Backdated creation time; `None` stamps the current time.
    pub created_at: Option<DateTime<Utc>>,
}
