//! Pantry Dashboard — onboarding resolution and the live views shown on
//! an organization's dashboard: outstanding requests, partner
//! approvals, low inventory and inventory totals.
//!
//! The pure selection rules live in their own modules; [`DashboardService`]
//! fans out to a [`DashboardSource`](pantry_core::source::DashboardSource)
//! and assembles one [`DashboardSnapshot`].

pub mod config;
pub mod error;
pub mod low_inventory;
pub mod onboarding;
pub mod partners;
pub mod requests;
pub mod service;
pub mod snapshot;
pub mod threshold;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use onboarding::OnboardingStep;
pub use service::DashboardService;
pub use snapshot::DashboardSnapshot;
pub use threshold::StockLevel;
