//! Read-only data access consumed by the dashboard engine.
//!
//! Implementations return materialized, organization-scoped
//! collections. Filtering, ordering and thresholds are applied by the
//! engine, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PantryResult;
use crate::models::partner::PartnerStatus;
use crate::models::request::RequestStatus;

/// Resource counts used to resolve the onboarding step.
///
/// Negative values are a contract violation and are rejected by the
/// onboarding resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationCounts {
    pub partner_count: i64,
    pub storage_location_count: i64,
    pub donation_site_count: i64,
    /// Sum of on-hand quantities across every storage location.
    pub total_inventory_units: i64,
}

/// One item at one storage location, with its thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevel {
    pub storage_location_id: Uuid,
    pub storage_location_name: String,
    pub item_id: Uuid,
    pub item_name: String,
    pub quantity: i64,
    pub minimum: i64,
    pub recommended: i64,
}

/// A request joined with the names needed to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub partner_id: Uuid,
    pub partner_name: String,
    pub requester_name: Option<String>,
    pub comments: Option<String>,
}

/// A partner with its primary contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub id: Uuid,
    pub status: PartnerStatus,
    pub name: String,
    pub email: String,
    pub contact_name: String,
}

pub trait DashboardSource: Send + Sync {
    fn organization_counts(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = PantryResult<OrganizationCounts>> + Send;
    fn inventory_levels(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = PantryResult<Vec<InventoryLevel>>> + Send;
    /// Every request of the organization, whatever its status.
    fn requests(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = PantryResult<Vec<RequestRecord>>> + Send;
    /// Every partner of the organization, whatever its status.
    fn partners(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = PantryResult<Vec<PartnerRecord>>> + Send;
}

/// Answers whether an organization currently has a logo attached.
///
/// File storage is the source of truth, so callers ask on every use
/// rather than caching the answer.
pub trait LogoStore: Send + Sync {
    fn is_logo_attached(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = PantryResult<bool>> + Send;
}
