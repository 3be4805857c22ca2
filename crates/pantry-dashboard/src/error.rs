//! Dashboard error types.

use pantry_core::error::PantryError;
use thiserror::Error;

use crate::service::Section;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{field} must not be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("{field} must not be negative (got {value})")]
    NegativeQuantity { field: &'static str, value: i64 },

    #[error("{section} section did not complete in time")]
    SectionTimeout { section: Section },
}

impl From<DashboardError> for PantryError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::NegativeCount { .. } | DashboardError::NegativeQuantity { .. } => {
                PantryError::Validation {
                    message: err.to_string(),
                }
            }
            DashboardError::SectionTimeout { section } => PantryError::Timeout {
                operation: format!("dashboard {section}"),
            },
        }
    }
}
