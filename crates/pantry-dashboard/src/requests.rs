//! Outstanding requests card.
//!
//! A request is outstanding while it is pending or started. The card
//! shows the newest ones first, up to a display limit, and reports how
//! many more are hidden behind the "see more" link.

use chrono::{DateTime, Utc};
use pantry_core::models::request::RequestStatus;
use pantry_core::source::RequestRecord;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// Date format of the request table (`03/14/2025`).
pub const REQUEST_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutstandingRequest {
    pub id: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub partner_name: String,
    pub requester_name: Option<String>,
    pub comments: Option<String>,
}

impl OutstandingRequest {
    pub fn formatted_date(&self) -> String {
        self.created_at.format(REQUEST_DATE_FORMAT).to_string()
    }

    /// Link to the request under the organization's short name.
    pub fn path(&self, short_name: &str) -> String {
        format!("/{short_name}/requests/{}", self.id)
    }
}

impl From<RequestRecord> for OutstandingRequest {
    fn from(record: RequestRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            created_at: record.created_at,
            partner_name: record.partner_name,
            requester_name: record.requester_name,
            comments: record.comments,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutstandingRequests {
    /// Newest first, at most the display limit.
    pub visible: Vec<OutstandingRequest>,
    /// Outstanding requests beyond the display limit.
    pub overflow_count: usize,
}

impl OutstandingRequests {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.overflow_count == 0
    }

    /// Every outstanding request, shown or not.
    pub fn total(&self) -> usize {
        self.visible.len() + self.overflow_count
    }
}

fn is_outstanding(record: &RequestRecord) -> bool {
    match &record.status {
        RequestStatus::Pending | RequestStatus::Started => true,
        RequestStatus::Fulfilled | RequestStatus::Discarded => false,
        RequestStatus::Unrecognized(status) => {
            warn!(
                request_id = %record.id,
                %status,
                "Leaving request with unrecognized status off the dashboard"
            );
            false
        }
    }
}

/// Select the outstanding requests, newest first, truncated to
/// `display_limit`. Requests created at the same instant are ordered by
/// id so that the cut-off is stable between calls.
pub fn select_outstanding(
    records: Vec<RequestRecord>,
    display_limit: usize,
) -> OutstandingRequests {
    let mut matching: Vec<RequestRecord> = records.into_iter().filter(is_outstanding).collect();
    matching.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let overflow_count = matching.len().saturating_sub(display_limit);
    matching.truncate(display_limit);

    OutstandingRequests {
        visible: matching.into_iter().map(OutstandingRequest::from).collect(),
        overflow_count,
    }
}
