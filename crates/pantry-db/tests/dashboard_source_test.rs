//! Integration tests for `SurrealDashboardSource` using in-memory
//! SurrealDB.

use chrono::{Duration, TimeZone, Utc};
use pantry_core::models::donation_site::CreateDonationSite;
use pantry_core::models::inventory_item::CreateInventoryItem;
use pantry_core::models::item::CreateItem;
use pantry_core::models::organization::CreateOrganization;
use pantry_core::models::partner::{CreatePartner, PartnerProfile, PartnerStatus};
use pantry_core::models::partner_user::CreatePartnerUser;
use pantry_core::models::request::{CreateRequest, RequestStatus};
use pantry_core::models::storage_location::CreateStorageLocation;
use pantry_core::repository::{
    DonationSiteRepository, InventoryItemRepository, ItemRepository, OrganizationRepository,
    PartnerRepository, PartnerUserRepository, RequestRepository, StorageLocationRepository,
};
use pantry_core::source::{DashboardSource, OrganizationCounts};
use pantry_db::SurrealDashboardSource;
use pantry_db::repository::{
    SurrealDonationSiteRepository, SurrealInventoryItemRepository, SurrealItemRepository,
    SurrealOrganizationRepository, SurrealPartnerRepository, SurrealPartnerUserRepository,
    SurrealRequestRepository, SurrealStorageLocationRepository,
};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

async fn setup() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    pantry_db::run_migrations(&db).await.unwrap();
    db
}

async fn create_org(db: &Surreal<Db>, short_name: &str) -> Uuid {
    SurrealOrganizationRepository::new(db.clone())
        .create(CreateOrganization {
            name: short_name.to_uppercase(),
            short_name: short_name.into(),
            logo: None,
        })
        .await
        .unwrap()
        .id
}

async fn create_partner(
    db: &Surreal<Db>,
    organization_id: Uuid,
    name: &str,
    status: PartnerStatus,
) -> Uuid {
    SurrealPartnerRepository::new(db.clone())
        .create(CreatePartner {
            organization_id,
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

async fn create_location(db: &Surreal<Db>, organization_id: Uuid, name: &str) -> Uuid {
    SurrealStorageLocationRepository::new(db.clone())
        .create(CreateStorageLocation {
            organization_id,
            name: name.into(),
            address: Some("1 Main St".into()),
        })
        .await
        .unwrap()
        .id
}

async fn create_item(
    db: &Surreal<Db>,
    organization_id: Uuid,
    name: &str,
    minimum: i64,
    recommended: i64,
) -> Uuid {
    SurrealItemRepository::new(db.clone())
        .create(CreateItem {
            organization_id,
            name: name.into(),
            on_hand_minimum_quantity: minimum,
            on_hand_recommended_quantity: recommended,
        })
        .await
        .unwrap()
        .id
}

async fn stock(db: &Surreal<Db>, organization_id: Uuid, location: Uuid, item: Uuid, qty: i64) {
    SurrealInventoryItemRepository::new(db.clone())
        .create(CreateInventoryItem {
            organization_id,
            storage_location_id: location,
            item_id: item,
            quantity: qty,
        })
        .await
        .unwrap();
}

// -----------------------------------------------------------------------
// Counts
// -----------------------------------------------------------------------

#[tokio::test]
async fn counts_are_zero_for_empty_organization() {
    let db = setup().await;
    let org_id = create_org(&db, "empty").await;
    let source = SurrealDashboardSource::new(db);

    let counts = source.organization_counts(org_id).await.unwrap();
    assert_eq!(counts, OrganizationCounts::default());
}

#[tokio::test]
async fn counts_cover_each_resource_and_sum_quantities() {
    let db = setup().await;
    let org_id = create_org(&db, "busy").await;

    create_partner(&db, org_id, "Shelter", PartnerStatus::Approved).await;
    create_partner(&db, org_id, "Clinic", PartnerStatus::Invited).await;
    SurrealDonationSiteRepository::new(db.clone())
        .create(CreateDonationSite {
            organization_id: org_id,
            name: "Church".into(),
            address: None,
        })
        .await
        .unwrap();

    let mut locations = Vec::new();
    for name in ["North", "South", "East"] {
        locations.push(create_location(&db, org_id, name).await);
    }
    let item = create_item(&db, org_id, "Diapers", 0, 0).await;
    for location in &locations {
        stock(&db, org_id, *location, item, 111).await;
    }

    let counts = SurrealDashboardSource::new(db)
        .organization_counts(org_id)
        .await
        .unwrap();
    assert_eq!(
        counts,
        OrganizationCounts {
            partner_count: 2,
            storage_location_count: 3,
            donation_site_count: 1,
            total_inventory_units: 333,
        }
    );
}

#[tokio::test]
async fn zero_quantity_rows_do_not_add_units() {
    let db = setup().await;
    let org_id = create_org(&db, "zero").await;
    let location = create_location(&db, org_id, "Main").await;
    let item = create_item(&db, org_id, "Wipes", 0, 0).await;
    stock(&db, org_id, location, item, 0).await;

    let counts = SurrealDashboardSource::new(db)
        .organization_counts(org_id)
        .await
        .unwrap();
    assert_eq!(counts.storage_location_count, 1);
    assert_eq!(counts.total_inventory_units, 0);
}

#[tokio::test]
async fn counts_do_not_cross_organizations() {
    let db = setup().await;
    let org_a = create_org(&db, "org-a").await;
    let org_b = create_org(&db, "org-b").await;

    create_partner(&db, org_b, "Other", PartnerStatus::Approved).await;
    let location = create_location(&db, org_b, "Elsewhere").await;
    let item = create_item(&db, org_b, "Wipes", 0, 0).await;
    stock(&db, org_b, location, item, 50).await;

    let source = SurrealDashboardSource::new(db);
    assert_eq!(
        source.organization_counts(org_a).await.unwrap(),
        OrganizationCounts::default()
    );
    assert_eq!(
        source
            .organization_counts(org_b)
            .await
            .unwrap()
            .total_inventory_units,
        50
    );
}

// -----------------------------------------------------------------------
// Inventory levels
// -----------------------------------------------------------------------

#[tokio::test]
async fn inventory_levels_join_names_and_thresholds() {
    let db = setup().await;
    let org_id = create_org(&db, "levels").await;
    let location = create_location(&db, org_id, "Main Warehouse").await;
    let wipes = create_item(&db, org_id, "Wipes", 150, 200).await;
    stock(&db, org_id, location, wipes, 100).await;

    let levels = SurrealDashboardSource::new(db)
        .inventory_levels(org_id)
        .await
        .unwrap();

    assert_eq!(levels.len(), 1);
    let level = &levels[0];
    assert_eq!(level.storage_location_id, location);
    assert_eq!(level.storage_location_name, "Main Warehouse");
    assert_eq!(level.item_id, wipes);
    assert_eq!(level.item_name, "Wipes");
    assert_eq!(
        (level.quantity, level.minimum, level.recommended),
        (100, 150, 200)
    );
}

#[tokio::test]
async fn inventory_levels_ignore_other_organizations() {
    let db = setup().await;
    let org_a = create_org(&db, "org-a").await;
    let org_b = create_org(&db, "org-b").await;
    let location = create_location(&db, org_b, "Elsewhere").await;
    let item = create_item(&db, org_b, "Wipes", 10, 20).await;
    stock(&db, org_b, location, item, 1).await;

    let levels = SurrealDashboardSource::new(db)
        .inventory_levels(org_a)
        .await
        .unwrap();
    assert!(levels.is_empty());
}

// -----------------------------------------------------------------------
// Requests
// -----------------------------------------------------------------------

#[tokio::test]
async fn requests_carry_partner_and_requester_names() {
    let db = setup().await;
    let org_id = create_org(&db, "requests").await;
    let partner_id = create_partner(&db, org_id, "Shelter", PartnerStatus::Approved).await;
    let user = SurrealPartnerUserRepository::new(db.clone())
        .create(CreatePartnerUser {
            organization_id: org_id,
            partner_id,
            name: "Dana Requester".into(),
            email: "dana@example.org".into(),
        })
        .await
        .unwrap();

    let requests = SurrealRequestRepository::new(db.clone());
    let created_at = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let with_user = requests
        .create(CreateRequest {
            organization_id: org_id,
            partner_id,
            partner_user_id: Some(user.id),
            status: RequestStatus::Pending,
            comments: Some("Size 4 please".into()),
            created_at: Some(created_at),
        })
        .await
        .unwrap();
    let without_user = requests
        .create(CreateRequest {
            organization_id: org_id,
            partner_id,
            partner_user_id: None,
            status: RequestStatus::Started,
            comments: None,
            created_at: Some(created_at + Duration::days(1)),
        })
        .await
        .unwrap();

    let mut records = SurrealDashboardSource::new(db)
        .requests(org_id)
        .await
        .unwrap();
    records.sort_by_key(|r| r.created_at);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, with_user.id);
    assert_eq!(records[0].partner_name, "Shelter");
    assert_eq!(records[0].requester_name.as_deref(), Some("Dana Requester"));
    assert_eq!(records[0].comments.as_deref(), Some("Size 4 please"));
    assert_eq!(records[0].created_at, created_at);
    assert_eq!(records[1].id, without_user.id);
    assert_eq!(records[1].status, RequestStatus::Started);
    assert_eq!(records[1].requester_name, None);
}

#[tokio::test]
async fn requests_include_every_status() {
    let db = setup().await;
    let org_id = create_org(&db, "statuses").await;
    let partner_id = create_partner(&db, org_id, "Shelter", PartnerStatus::Approved).await;
    let repo = SurrealRequestRepository::new(db.clone());

    for status in [
        RequestStatus::Pending,
        RequestStatus::Started,
        RequestStatus::Fulfilled,
        RequestStatus::Discarded,
    ] {
        repo.create(CreateRequest {
            organization_id: org_id,
            partner_id,
            partner_user_id: None,
            status,
            comments: None,
            created_at: None,
        })
        .await
        .unwrap();
    }

    let records = SurrealDashboardSource::new(db)
        .requests(org_id)
        .await
        .unwrap();
    assert_eq!(records.len(), 4);
}

#[tokio::test]
async fn unknown_request_status_is_surfaced_as_unrecognized() {
    let db = setup().await;
    let org_id = create_org(&db, "drift").await;
    let partner_id = create_partner(&db, org_id, "Shelter", PartnerStatus::Approved).await;
    SurrealRequestRepository::new(db.clone())
        .create(CreateRequest {
            organization_id: org_id,
            partner_id,
            partner_user_id: None,
            status: RequestStatus::Unrecognized("on_hold".into()),
            comments: None,
            created_at: None,
        })
        .await
        .unwrap();

    let records = SurrealDashboardSource::new(db)
        .requests(org_id)
        .await
        .unwrap();
    assert_eq!(
        records[0].status,
        RequestStatus::Unrecognized("on_hold".into())
    );
}

// -----------------------------------------------------------------------
// Partners
// -----------------------------------------------------------------------

#[tokio::test]
async fn partners_expose_contact_details() {
    let db = setup().await;
    let org_id = create_org(&db, "partners").await;
    let first = create_partner(&db, org_id, "Alpha", PartnerStatus::AwaitingReview).await;
    let second = create_partner(&db, org_id, "Beta", PartnerStatus::Approved).await;

    let records = SurrealDashboardSource::new(db)
        .partners(org_id)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    let alpha = records.iter().find(|r| r.id == first).unwrap();
    assert_eq!(alpha.name, "Alpha");
    assert_eq!(alpha.status, PartnerStatus::AwaitingReview);
    assert_eq!(alpha.email, "alpha@example.org");
    assert_eq!(alpha.contact_name, "Alpha Contact");
    let beta = records.iter().find(|r| r.id == second).unwrap();
    assert_eq!(beta.status, PartnerStatus::Approved);
}

#[tokio::test]
async fn partners_do_not_cross_organizations() {
    let db = setup().await;
    let org_a = create_org(&db, "org-a").await;
    let org_b = create_org(&db, "org-b").await;
    create_partner(&db, org_b, "Other", PartnerStatus::AwaitingReview).await;

    let records = SurrealDashboardSource::new(db)
        .partners(org_a)
        .await
        .unwrap();
    assert!(records.is_empty());
}
