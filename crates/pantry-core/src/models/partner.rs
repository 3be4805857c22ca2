//! Partner domain model.
//!
//! Partners are the agencies an organization distributes to. A partner
//! moves through an application lifecycle; the dashboard surfaces the
//! ones waiting for the organization to review their application.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    Uninvited,
    Invited,
    AwaitingReview,
    Approved,
    RecertificationRequired,
    Deactivated,
    /// A stored value this build does not know about.
    #[serde(untagged)]
    Unrecognized(String),
}

impl PartnerStatus {
    /// Parse a persisted status. Unknown values are preserved rather
    /// than rejected.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "uninvited" => Self::Uninvited,
            "invited" => Self::Invited,
            "awaiting_review" => Self::AwaitingReview,
            "approved" => Self::Approved,
            "recertification_required" => Self::RecertificationRequired,
            "deactivated" => Self::Deactivated,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Uninvited => "uninvited",
            Self::Invited => "invited",
            Self::AwaitingReview => "awaiting_review",
            Self::Approved => "approved",
            Self::RecertificationRequired => "recertification_required",
            Self::Deactivated => "deactivated",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for PartnerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact details from the partner's application profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerProfile {
    pub primary_contact_name: String,
    pub primary_contact_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub status: PartnerStatus,
    pub profile: PartnerProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePartner {
    pub organization_id: Uuid,
    pub name: String,
    pub status: PartnerStatus,
    pub profile: PartnerProfile,
}
