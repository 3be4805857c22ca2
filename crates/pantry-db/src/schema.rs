//! Schema definitions and migration runner for SurrealDB.
//!
//! All tables are SCHEMAFULL. UUIDs and foreign keys are stored as
//! strings. Lifecycle statuses are stored as snake_case strings without
//! ASSERT constraints: readers map unknown values to an explicit
//! "unrecognized" status instead of failing.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Organizations (global scope)
-- =======================================================================
DEFINE TABLE organization SCHEMAFULL;
DEFINE FIELD name ON TABLE organization TYPE string;
DEFINE FIELD short_name ON TABLE organization TYPE string;
DEFINE FIELD logo ON TABLE organization TYPE option<string>;
DEFINE FIELD created_at ON TABLE organization TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE organization TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_organization_short_name ON TABLE organization \
    COLUMNS short_name UNIQUE;

-- =======================================================================
-- Partners and their users
-- =======================================================================
DEFINE TABLE partner SCHEMAFULL;
DEFINE FIELD organization_id ON TABLE partner TYPE string;
DEFINE FIELD name ON TABLE partner TYPE string;
DEFINE FIELD status ON TABLE partner TYPE string;
DEFINE FIELD primary_contact_name ON TABLE partner TYPE string;
DEFINE FIELD primary_contact_email ON TABLE partner TYPE string;
DEFINE FIELD created_at ON TABLE partner TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE partner TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_partner_org ON TABLE partner COLUMNS organization_id;

DEFINE TABLE partner_user SCHEMAFULL;
DEFINE FIELD organization_id ON TABLE partner_user TYPE string;
DEFINE FIELD partner_id ON TABLE partner_user TYPE string;
DEFINE FIELD name ON TABLE partner_user TYPE string;
DEFINE FIELD email ON TABLE partner_user TYPE string;
DEFINE FIELD created_at ON TABLE partner_user TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_partner_user_org ON TABLE partner_user \
    COLUMNS organization_id;

-- =======================================================================
-- Storage locations, donation sites, items
-- =======================================================================
DEFINE TABLE storage_location SCHEMAFULL;
DEFINE FIELD organization_id ON TABLE storage_location TYPE string;
DEFINE FIELD name ON TABLE storage_location TYPE string;
DEFINE FIELD address ON TABLE storage_location TYPE option<string>;
DEFINE FIELD created_at ON TABLE storage_location TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_storage_location_org ON TABLE storage_location \
    COLUMNS organization_id;

DEFINE TABLE donation_site SCHEMAFULL;
DEFINE FIELD organization_id ON TABLE donation_site TYPE string;
DEFINE FIELD name ON TABLE donation_site TYPE string;
DEFINE FIELD address ON TABLE donation_site TYPE option<string>;
DEFINE FIELD created_at ON TABLE donation_site TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_donation_site_org ON TABLE donation_site \
    COLUMNS organization_id;

DEFINE TABLE item SCHEMAFULL;
DEFINE FIELD organization_id ON TABLE item TYPE string;
DEFINE FIELD name ON TABLE item TYPE string;
DEFINE FIELD on_hand_minimum_quantity ON TABLE item TYPE int DEFAULT 0;
DEFINE FIELD on_hand_recommended_quantity ON TABLE item TYPE int \
    DEFAULT 0;
DEFINE FIELD created_at ON TABLE item TYPE datetime DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE item TYPE datetime DEFAULT time::now();
DEFINE INDEX idx_item_org ON TABLE item COLUMNS organization_id;

-- =======================================================================
-- Inventory: quantity of one item at one storage location
-- =======================================================================
DEFINE TABLE inventory_item SCHEMAFULL;
DEFINE FIELD organization_id ON TABLE inventory_item TYPE string;
DEFINE FIELD storage_location_id ON TABLE inventory_item TYPE string;
DEFINE FIELD item_id ON TABLE inventory_item TYPE string;
DEFINE FIELD quantity ON TABLE inventory_item TYPE int DEFAULT 0;
DEFINE FIELD created_at ON TABLE inventory_item TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE inventory_item TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_inventory_item_org ON TABLE inventory_item \
    COLUMNS organization_id;
DEFINE INDEX idx_inventory_item_location_item ON TABLE inventory_item \
    COLUMNS storage_location_id, item_id UNIQUE;

-- =======================================================================
-- Partner requests (discarded requests are kept)
-- =======================================================================
DEFINE TABLE request SCHEMAFULL;
DEFINE FIELD organization_id ON TABLE request TYPE string;
DEFINE FIELD partner_id ON TABLE request TYPE string;
DEFINE FIELD partner_user_id ON TABLE request TYPE option<string>;
DEFINE FIELD status ON TABLE request TYPE string;
DEFINE FIELD comments ON TABLE request TYPE option<string>;
DEFINE FIELD created_at ON TABLE request TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE request TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_request_org_status ON TABLE request \
    COLUMNS organization_id, status;
";

/// Run all pending migrations against the database.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );
        db.query(migration.sql).await?.check().map_err(|e| {
            DbError::Migration(format!(
                "v{} '{}' failed: {}",
                migration.version, migration.name, e,
            ))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "could not record v{}: {}",
                    migration.version, e,
                ))
            })?;

        info!(version = migration.version, "Migration applied");
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
