//! Repository trait definitions for the write path.
//!
//! All repository operations are async. Organization-scoped
//! repositories require an `organization_id` parameter so that one
//! organization can never read or modify another's records.

use uuid::Uuid;

use crate::error::PantryResult;
use crate::models::{
    donation_site::{CreateDonationSite, DonationSite},
    inventory_item::{CreateInventoryItem, InventoryItem},
    item::{CreateItem, Item},
    organization::{CreateOrganization, Organization, UpdateOrganization},
    partner::{CreatePartner, Partner, PartnerStatus},
    partner_user::{CreatePartnerUser, PartnerUser},
    request::{CreateRequest, Request, RequestStatus},
    storage_location::{CreateStorageLocation, StorageLocation},
};

// ---------------------------------------------------------------------------
// Organization (global scope)
// ---------------------------------------------------------------------------

pub trait OrganizationRepository: Send + Sync {
    fn create(
        &self,
        input: CreateOrganization,
    ) -> impl Future<Output = PantryResult<Organization>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = PantryResult<Organization>> + Send;
    fn get_by_short_name(
        &self,
        short_name: &str,
    ) -> impl Future<Output = PantryResult<Organization>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateOrganization,
    ) -> impl Future<Output = PantryResult<Organization>> + Send;
}

// ---------------------------------------------------------------------------
// Organization-scoped repositories
// ---------------------------------------------------------------------------

pub trait PartnerRepository: Send + Sync {
    fn create(&self, input: CreatePartner) -> impl Future<Output = PantryResult<Partner>> + Send;
    fn get_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = PantryResult<Partner>> + Send;
    /// Move a partner to another lifecycle status (e.g. approve it).
    fn update_status(
        &self,
        organization_id: Uuid,
        id: Uuid,
        status: PartnerStatus,
    ) -> impl Future<Output = PantryResult<Partner>> + Send;
}

pub trait PartnerUserRepository: Send + Sync {
    /// Fails with `NotFound` if the partner is not in the organization.
    fn create(
        &self,
        input: CreatePartnerUser,
    ) -> impl Future<Output = PantryResult<PartnerUser>> + Send;
}

pub trait StorageLocationRepository: Send + Sync {
    fn create(
        &self,
        input: CreateStorageLocation,
    ) -> impl Future<Output = PantryResult<StorageLocation>> + Send;
}

pub trait DonationSiteRepository: Send + Sync {
    fn create(
        &self,
        input: CreateDonationSite,
    ) -> impl Future<Output = PantryResult<DonationSite>> + Send;
}

pub trait ItemRepository: Send + Sync {
    fn create(&self, input: CreateItem) -> impl Future<Output = PantryResult<Item>> + Send;
}

pub trait InventoryItemRepository: Send + Sync {
    /// Record a quantity of an item at a storage location. Both must
    /// belong to the organization.
    fn create(
        &self,
        input: CreateInventoryItem,
    ) -> impl Future<Output = PantryResult<InventoryItem>> + Send;
}

pub trait RequestRepository: Send + Sync {
    /// Fails with `NotFound` if the partner is not in the organization.
    fn create(&self, input: CreateRequest) -> impl Future<Output = PantryResult<Request>> + Send;
    fn get_by_id(
        &self,
        organization_id: Uuid,
        id: Uuid,
    ) -> impl Future<Output = PantryResult<Request>> + Send;
    /// Move a request through its lifecycle. Discarding is a status
    /// change; the record is kept.
    fn update_status(
        &self,
        organization_id: Uuid,
        id: Uuid,
        status: RequestStatus,
    ) -> impl Future<Output = PantryResult<Request>> + Send;
}
