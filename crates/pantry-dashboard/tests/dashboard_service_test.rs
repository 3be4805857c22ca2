//! End-to-end dashboard builds against in-memory SurrealDB.

use chrono::{Duration, TimeZone, Utc};
use pantry_core::models::donation_site::CreateDonationSite;
use pantry_core::models::inventory_item::CreateInventoryItem;
use pantry_core::models::item::CreateItem;
use pantry_core::models::organization::{CreateOrganization, UpdateOrganization};
use pantry_core::models::partner::{CreatePartner, PartnerProfile, PartnerStatus};
use pantry_core::models::request::{CreateRequest, RequestStatus};
use pantry_core::models::storage_location::CreateStorageLocation;
use pantry_core::repository::{
    DonationSiteRepository, InventoryItemRepository, ItemRepository, OrganizationRepository,
    PartnerRepository, RequestRepository, StorageLocationRepository,
};
use pantry_dashboard::{DashboardConfig, DashboardService, OnboardingStep, StockLevel};
use pantry_db::SurrealDashboardSource;
use pantry_db::repository::{
    SurrealDonationSiteRepository, SurrealInventoryItemRepository, SurrealItemRepository,
    SurrealOrganizationRepository, SurrealPartnerRepository, SurrealRequestRepository,
    SurrealStorageLocationRepository,
};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

type Service = DashboardService<SurrealDashboardSource<Db>, SurrealOrganizationRepository<Db>>;

struct Fixture {
    db: Surreal<Db>,
    organization_id: Uuid,
    service: Service,
}

async fn setup() -> Fixture {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    pantry_db::run_migrations(&db).await.unwrap();

    let organizations = SurrealOrganizationRepository::new(db.clone());
    let organization_id = organizations
        .create(CreateOrganization {
            name: "Pawnee Diaper Bank".into(),
            short_name: "pawnee".into(),
            logo: None,
        })
        .await
        .unwrap()
        .id;

    let service = DashboardService::new(
        SurrealDashboardSource::new(db.clone()),
        organizations,
        DashboardConfig::default(),
    );

    Fixture {
        db,
        organization_id,
        service,
    }
}

impl Fixture {
    async fn add_partner(&self, name: &str, status: PartnerStatus) -> Uuid {
        SurrealPartnerRepository::new(self.db.clone())
            .create(CreatePartner {
                organization_id: self.organization_id,
                name: name.into(),
                status,
                profile: PartnerProfile {
                    primary_contact_name: format!("{name} Contact"),
                    primary_contact_email: format!("{}@example.org", name.to_lowercase()),
                },
            })
            .await
            .unwrap()
            .id
    }

    async fn add_storage_location(&self, name: &str) -> Uuid {
        SurrealStorageLocationRepository::new(self.db.clone())
            .create(CreateStorageLocation {
                organization_id: self.organization_id,
                name: name.into(),
                address: None,
            })
            .await
            .unwrap()
            .id
    }

    async fn add_donation_site(&self) {
        SurrealDonationSiteRepository::new(self.db.clone())
            .create(CreateDonationSite {
                organization_id: self.organization_id,
                name: "Grace Church".into(),
                address: Some("123 Main St".into()),
            })
            .await
            .unwrap();
    }

    async fn add_item(&self, name: &str, minimum: i64, recommended: i64) -> Uuid {
        SurrealItemRepository::new(self.db.clone())
            .create(CreateItem {
                organization_id: self.organization_id,
                name: name.into(),
                on_hand_minimum_quantity: minimum,
                on_hand_recommended_quantity: recommended,
            })
            .await
            .unwrap()
            .id
    }

    async fn stock(&self, location: Uuid, item: Uuid, quantity: i64) {
        SurrealInventoryItemRepository::new(self.db.clone())
            .create(CreateInventoryItem {
                organization_id: self.organization_id,
                storage_location_id: location,
                item_id: item,
                quantity,
            })
            .await
            .unwrap();
    }

    async fn add_request(&self, partner_id: Uuid, status: RequestStatus, minutes_ago: i64) -> Uuid {
        let base = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        SurrealRequestRepository::new(self.db.clone())
            .create(CreateRequest {
                organization_id: self.organization_id,
                partner_id,
                partner_user_id: None,
                status,
                comments: Some(format!("request {minutes_ago}")),
                created_at: Some(base - Duration::minutes(minutes_ago)),
            })
            .await
            .unwrap()
            .id
    }
}

// -----------------------------------------------------------------------
// Onboarding
// -----------------------------------------------------------------------

#[tokio::test]
async fn onboarding_walks_through_every_step() {
    let f = setup().await;

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.onboarding, OnboardingStep::AddPartner);
    assert!(snapshot.getting_started_guide_visible());

    f.add_partner("Shelter", PartnerStatus::Approved).await;
    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.onboarding, OnboardingStep::AddStorageLocation);

    let location = f.add_storage_location("Main Warehouse").await;
    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.onboarding, OnboardingStep::AddDonationSite);

    f.add_donation_site().await;
    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.onboarding, OnboardingStep::AddInventory);

    // A storage location with zero on hand does not count as inventory.
    let wipes = f.add_item("Wipes", 0, 0).await;
    f.stock(location, wipes, 0).await;
    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.onboarding, OnboardingStep::AddInventory);

    let diapers = f.add_item("Diapers", 0, 0).await;
    f.stock(location, diapers, 125).await;
    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.onboarding, OnboardingStep::Complete);
    assert!(!snapshot.getting_started_guide_visible());
}

#[tokio::test]
async fn partner_is_required_before_anything_else() {
    let f = setup().await;
    let location = f.add_storage_location("Main").await;
    f.add_donation_site().await;
    let item = f.add_item("Diapers", 0, 0).await;
    f.stock(location, item, 500).await;

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.onboarding, OnboardingStep::AddPartner);
}

// -----------------------------------------------------------------------
// Outstanding requests
// -----------------------------------------------------------------------

#[tokio::test]
async fn fifty_pending_requests_show_twenty_five() {
    let f = setup().await;
    let partner = f.add_partner("Shelter", PartnerStatus::Approved).await;
    for minutes_ago in 0..50 {
        f.add_request(partner, RequestStatus::Pending, minutes_ago)
            .await;
    }

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    let outstanding = &snapshot.outstanding_requests;
    assert_eq!(outstanding.visible.len(), 25);
    assert_eq!(outstanding.overflow_count, 25);
    // Newest first.
    assert_eq!(
        outstanding.visible[0].comments.as_deref(),
        Some("request 0")
    );
    assert_eq!(
        outstanding.visible[24].comments.as_deref(),
        Some("request 24")
    );
}

#[tokio::test]
async fn started_requests_are_outstanding_but_closed_ones_are_not() {
    let f = setup().await;
    let partner = f.add_partner("Shelter", PartnerStatus::Approved).await;
    let started = f.add_request(partner, RequestStatus::Started, 5).await;
    let fulfilled = f.add_request(partner, RequestStatus::Fulfilled, 4).await;
    let discarded = f.add_request(partner, RequestStatus::Pending, 3).await;
    SurrealRequestRepository::new(f.db.clone())
        .update_status(f.organization_id, discarded, RequestStatus::Discarded)
        .await
        .unwrap();

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    let ids: Vec<Uuid> = snapshot
        .outstanding_requests
        .visible
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![started]);
    assert!(!ids.contains(&fulfilled));
    assert_eq!(snapshot.outstanding_requests.overflow_count, 0);

    let request = &snapshot.outstanding_requests.visible[0];
    assert_eq!(request.partner_name, "Shelter");
    assert_eq!(request.formatted_date(), "03/14/2025");
    assert_eq!(request.path("pawnee"), format!("/pawnee/requests/{started}"));
}

#[tokio::test]
async fn configured_request_limit_is_applied() {
    let f = setup().await;
    let partner = f.add_partner("Shelter", PartnerStatus::Approved).await;
    for minutes_ago in 0..4 {
        f.add_request(partner, RequestStatus::Pending, minutes_ago)
            .await;
    }

    let service = DashboardService::new(
        SurrealDashboardSource::new(f.db.clone()),
        SurrealOrganizationRepository::new(f.db.clone()),
        DashboardConfig {
            outstanding_request_limit: 3,
            ..Default::default()
        },
    );
    let snapshot = service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.outstanding_requests.visible.len(), 3);
    assert_eq!(snapshot.outstanding_requests.overflow_count, 1);
}

// -----------------------------------------------------------------------
// Partner approvals
// -----------------------------------------------------------------------

#[tokio::test]
async fn only_partners_awaiting_review_are_listed() {
    let f = setup().await;
    let waiting = f.add_partner("Waiting", PartnerStatus::AwaitingReview).await;
    f.add_partner("Invited", PartnerStatus::Invited).await;
    f.add_partner("Approved", PartnerStatus::Approved).await;
    f.add_partner("Recert", PartnerStatus::RecertificationRequired)
        .await;
    f.add_partner("Gone", PartnerStatus::Deactivated).await;

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    let partners = snapshot.partner_approvals.partners();
    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0].id, waiting);
    assert_eq!(partners[0].name, "Waiting");
    assert_eq!(partners[0].contact_email, "waiting@example.org");
    assert_eq!(partners[0].contact_name, "Waiting Contact");
    assert_eq!(
        partners[0].review_path("pawnee"),
        format!("/pawnee/partners/{waiting}#partner-information")
    );
}

#[tokio::test]
async fn approved_partner_leaves_the_approval_list() {
    let f = setup().await;
    let partner = f.add_partner("Shelter", PartnerStatus::AwaitingReview).await;
    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert!(!snapshot.partner_approvals.is_none_waiting());

    SurrealPartnerRepository::new(f.db.clone())
        .update_status(f.organization_id, partner, PartnerStatus::Approved)
        .await
        .unwrap();

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert!(snapshot.partner_approvals.is_none_waiting());
}

// -----------------------------------------------------------------------
// Inventory
// -----------------------------------------------------------------------

#[tokio::test]
async fn low_inventory_lists_items_below_thresholds() {
    let f = setup().await;
    let location = f.add_storage_location("Main Warehouse").await;
    let below_minimum = f.add_item("Wipes", 150, 200).await;
    let below_recommended = f.add_item("Diapers", 0, 200).await;
    let adequate = f.add_item("Pads", 0, 200).await;
    f.stock(location, below_minimum, 100).await;
    f.stock(location, below_recommended, 100).await;
    f.stock(location, adequate, 200).await;

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    let mut report: Vec<(&str, StockLevel)> = snapshot
        .low_inventory
        .iter()
        .map(|e| (e.item_name.as_str(), e.level))
        .collect();
    report.sort_by_key(|(name, _)| *name);

    assert_eq!(
        report,
        vec![
            ("Diapers", StockLevel::BelowRecommended),
            ("Wipes", StockLevel::BelowMinimum),
        ]
    );
    assert!(
        snapshot
            .low_inventory
            .iter()
            .all(|e| e.storage_location_name == "Main Warehouse")
    );
}

#[tokio::test]
async fn inventory_total_sums_every_location() {
    let f = setup().await;
    let item = f.add_item("Diapers", 0, 0).await;
    for name in ["North", "South", "East"] {
        let location = f.add_storage_location(name).await;
        f.stock(location, item, 111).await;
    }

    let snapshot = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(snapshot.inventory_total, 333);
    assert!(snapshot.low_inventory.is_empty());
}

// -----------------------------------------------------------------------
// Logo and idempotence
// -----------------------------------------------------------------------

#[tokio::test]
async fn logo_presence_is_read_on_every_build() {
    let f = setup().await;
    let organizations = SurrealOrganizationRepository::new(f.db.clone());

    assert!(!f.service.build(f.organization_id).await.unwrap().logo_present);

    organizations
        .update(
            f.organization_id,
            UpdateOrganization {
                logo: Some(Some("logo.jpg".into())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(f.service.build(f.organization_id).await.unwrap().logo_present);

    organizations
        .update(
            f.organization_id,
            UpdateOrganization {
                logo: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!f.service.build(f.organization_id).await.unwrap().logo_present);
}

#[tokio::test]
async fn repeated_builds_are_identical() {
    let f = setup().await;
    let partner = f.add_partner("Shelter", PartnerStatus::AwaitingReview).await;
    let location = f.add_storage_location("Main").await;
    let item = f.add_item("Wipes", 150, 200).await;
    f.stock(location, item, 100).await;
    for minutes_ago in 0..30 {
        f.add_request(partner, RequestStatus::Pending, minutes_ago % 3)
            .await;
    }

    let first = f.service.build(f.organization_id).await.unwrap();
    let second = f.service.build(f.organization_id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_organization_fails_the_build() {
    let f = setup().await;
    // Logo lookup is the only section that requires the record to exist.
    assert!(f.service.build(Uuid::new_v4()).await.is_err());
}
