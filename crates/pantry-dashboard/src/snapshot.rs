//! The assembled dashboard read model.

use serde::Serialize;
use uuid::Uuid;

use crate::low_inventory::LowInventoryEntry;
use crate::onboarding::OnboardingStep;
use crate::partners::PartnerApprovals;
use crate::requests::OutstandingRequests;

/// Everything the dashboard page shows for one organization at one
/// point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub organization_id: Uuid,
    pub onboarding: OnboardingStep,
    /// Whether a logo is attached; the page falls back to the
    /// organization name otherwise.
    pub logo_present: bool,
    /// Sum of on-hand quantities across every storage location.
    pub inventory_total: u64,
    pub outstanding_requests: OutstandingRequests,
    pub partner_approvals: PartnerApprovals,
    pub low_inventory: Vec<LowInventoryEntry>,
}

impl DashboardSnapshot {
    pub fn getting_started_guide_visible(&self) -> bool {
        self.onboarding.guide_visible()
    }
}
