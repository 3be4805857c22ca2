//! Partner approvals card: partners whose application awaits review.

use pantry_core::models::partner::PartnerStatus;
use pantry_core::source::PartnerRecord;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerApproval {
    pub id: Uuid,
    pub name: String,
    pub contact_email: String,
    pub contact_name: String,
}

impl PartnerApproval {
    /// Link to the partner's application section.
    pub fn review_path(&self, short_name: &str) -> String {
        format!("/{short_name}/partners/{}#partner-information", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "partners", rename_all = "snake_case")]
pub enum PartnerApprovals {
    /// No partner is waiting for a decision.
    NoneWaiting,
    Waiting(Vec<PartnerApproval>),
}

impl PartnerApprovals {
    pub fn partners(&self) -> &[PartnerApproval] {
        match self {
            Self::NoneWaiting => &[],
            Self::Waiting(partners) => partners,
        }
    }

    pub fn is_none_waiting(&self) -> bool {
        matches!(self, Self::NoneWaiting)
    }
}

/// Keep the partners awaiting review, in source order. No limit is
/// applied.
pub fn awaiting_review(records: Vec<PartnerRecord>) -> PartnerApprovals {
    let waiting: Vec<PartnerApproval> = records
        .into_iter()
        .filter(|record| match &record.status {
            PartnerStatus::AwaitingReview => true,
            PartnerStatus::Unrecognized(status) => {
                warn!(
                    partner_id = %record.id,
                    %status,
                    "Leaving partner with unrecognized status off the dashboard"
                );
                false
            }
            _ => false,
        })
        .map(|record| PartnerApproval {
            id: record.id,
            name: record.name,
            contact_email: record.email,
            contact_name: record.contact_name,
        })
        .collect();

    if waiting.is_empty() {
        PartnerApprovals::NoneWaiting
    } else {
        PartnerApprovals::Waiting(waiting)
    }
}
