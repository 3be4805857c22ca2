//! Domain models for the pantry system.
//!
//! Every entity below the organization carries an `organization_id`
//! and is only ever read within that organization.

pub mod donation_site;
pub mod inventory_item;
pub mod item;
pub mod organization;
pub mod partner;
pub mod partner_user;
pub mod request;
pub mod storage_location;
