//! Dashboard service — builds a [`DashboardSnapshot`] for one
//! organization.

use std::fmt;

use pantry_core::error::{PantryError, PantryResult};
use pantry_core::source::{DashboardSource, LogoStore};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::low_inventory;
use crate::onboarding::OnboardingCounts;
use crate::partners;
use crate::requests;
use crate::snapshot::DashboardSnapshot;

/// One independently computed part of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Onboarding,
    Logo,
    OutstandingRequests,
    PartnerApprovals,
    LowInventory,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Onboarding => "onboarding",
            Self::Logo => "logo",
            Self::OutstandingRequests => "outstanding requests",
            Self::PartnerApprovals => "partner approvals",
            Self::LowInventory => "low inventory",
        })
    }
}

/// Dashboard service.
///
/// Generic over the data source and logo store so that the engine has
/// no dependency on the database crate. Holds no mutable state; one
/// instance can serve concurrent builds.
pub struct DashboardService<S: DashboardSource, L: LogoStore> {
    source: S,
    logos: L,
    config: DashboardConfig,
}

impl<S: DashboardSource, L: LogoStore> DashboardService<S, L> {
    pub fn new(source: S, logos: L, config: DashboardConfig) -> Self {
        Self {
            source,
            logos,
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Build the dashboard for an organization.
    ///
    /// Sections are read concurrently and each is bounded by the
    /// configured timeout. The build waits for every section; if any
    /// failed, all failures are logged and the first one (in section
    /// order) is returned. A partial snapshot is never produced.
    pub async fn build(&self, organization_id: Uuid) -> PantryResult<DashboardSnapshot> {
        debug!(%organization_id, "Building dashboard");

        let (counts, logo_present, request_records, partner_records, inventory) = tokio::join!(
            self.bounded(
                Section::Onboarding,
                self.source.organization_counts(organization_id)
            ),
            self.bounded(Section::Logo, self.logos.is_logo_attached(organization_id)),
            self.bounded(
                Section::OutstandingRequests,
                self.source.requests(organization_id)
            ),
            self.bounded(
                Section::PartnerApprovals,
                self.source.partners(organization_id)
            ),
            self.bounded(
                Section::LowInventory,
                self.source.inventory_levels(organization_id)
            ),
        );

        let counts = counts.and_then(|raw| Ok(OnboardingCounts::try_from(&raw)?));
        let limit = self.config.outstanding_request_limit;
        let outstanding =
            request_records.map(|records| requests::select_outstanding(records, limit));
        let approvals = partner_records.map(partners::awaiting_review);
        let low_inventory = inventory.and_then(|levels| Ok(low_inventory::report(levels)?));

        let (counts, logo_present, outstanding_requests, partner_approvals, low_inventory) =
            match (counts, logo_present, outstanding, approvals, low_inventory) {
                (Ok(c), Ok(l), Ok(r), Ok(p), Ok(i)) => (c, l, r, p, i),
                (c, l, r, p, i) => {
                    let failures = [
                        (Section::Onboarding, c.err()),
                        (Section::Logo, l.err()),
                        (Section::OutstandingRequests, r.err()),
                        (Section::PartnerApprovals, p.err()),
                        (Section::LowInventory, i.err()),
                    ];
                    return Err(first_failure(organization_id, failures));
                }
            };

        let snapshot = DashboardSnapshot {
            organization_id,
            onboarding: counts.step(),
            logo_present,
            inventory_total: counts.inventory_units,
            outstanding_requests,
            partner_approvals,
            low_inventory,
        };

        debug!(
            %organization_id,
            onboarding = ?snapshot.onboarding,
            outstanding = snapshot.outstanding_requests.total(),
            awaiting_review = snapshot.partner_approvals.partners().len(),
            low_inventory = snapshot.low_inventory.len(),
            "Dashboard built"
        );

        Ok(snapshot)
    }

    async fn bounded<T>(
        &self,
        section: Section,
        read: impl Future<Output = PantryResult<T>>,
    ) -> PantryResult<T> {
        match tokio::time::timeout(self.config.section_timeout(), read).await {
            Ok(result) => result,
            Err(_) => Err(DashboardError::SectionTimeout { section }.into()),
        }
    }
}

/// Log every failed section and return the first failure.
fn first_failure(
    organization_id: Uuid,
    failures: [(Section, Option<PantryError>); 5],
) -> PantryError {
    let mut first = None;
    for (section, err) in failures {
        let Some(err) = err else { continue };
        warn!(%organization_id, %section, error = %err, "Dashboard section failed");
        first.get_or_insert(err);
    }
    first.unwrap_or_else(|| {
        PantryError::Internal("dashboard build failed without an error".into())
    })
}
