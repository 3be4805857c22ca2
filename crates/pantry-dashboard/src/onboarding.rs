//! Getting-started guide: which setup step an organization is on.
//!
//! Steps are gated in a fixed order. An organization without partners
//! is asked to add one before anything else, even if it already has
//! storage locations or inventory.

use pantry_core::source::OrganizationCounts;
use serde::Serialize;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    AddPartner,
    AddStorageLocation,
    AddDonationSite,
    AddInventory,
    /// Every step is done; the guide is hidden.
    Complete,
}

impl OnboardingStep {
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Whether the getting-started guide should be shown.
    pub fn guide_visible(self) -> bool {
        !self.is_complete()
    }
}

/// Resource counts that have been checked to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingCounts {
    pub partners: u64,
    pub storage_locations: u64,
    pub donation_sites: u64,
    pub inventory_units: u64,
}

impl OnboardingCounts {
    /// The first step whose gate is not yet satisfied.
    pub fn step(&self) -> OnboardingStep {
        if self.partners == 0 {
            OnboardingStep::AddPartner
        } else if self.storage_locations == 0 {
            OnboardingStep::AddStorageLocation
        } else if self.donation_sites == 0 {
            OnboardingStep::AddDonationSite
        } else if self.inventory_units == 0 {
            OnboardingStep::AddInventory
        } else {
            OnboardingStep::Complete
        }
    }
}

impl TryFrom<&OrganizationCounts> for OnboardingCounts {
    type Error = DashboardError;

    fn try_from(counts: &OrganizationCounts) -> Result<Self, Self::Error> {
        let non_negative = |field: &'static str, value: i64| {
            u64::try_from(value).map_err(|_| DashboardError::NegativeCount { field, value })
        };

        Ok(Self {
            partners: non_negative("partner_count", counts.partner_count)?,
            storage_locations: non_negative(
                "storage_location_count",
                counts.storage_location_count,
            )?,
            donation_sites: non_negative("donation_site_count", counts.donation_site_count)?,
            inventory_units: non_negative("total_inventory_units", counts.total_inventory_units)?,
        })
    }
}

/// Resolve the current onboarding step from raw counts.
pub fn resolve(counts: &OrganizationCounts) -> Result<OnboardingStep, DashboardError> {
    OnboardingCounts::try_from(counts).map(|c| c.step())
}
