//! On-hand threshold classification.

use serde::Serialize;

use crate::error::DashboardError;

/// How an on-hand quantity compares with an item's thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Adequate,
    BelowMinimum,
    BelowRecommended,
}

impl StockLevel {
    pub fn is_low(self) -> bool {
        !matches!(self, Self::Adequate)
    }
}

/// Classify `quantity` against `minimum` and `recommended`.
///
/// The minimum is checked first, so a quantity under both thresholds is
/// `BelowMinimum` whatever the recommended level is.
pub fn classify(
    quantity: i64,
    minimum: i64,
    recommended: i64,
) -> Result<StockLevel, DashboardError> {
    for (field, value) in [
        ("quantity", quantity),
        ("on_hand_minimum_quantity", minimum),
        ("on_hand_recommended_quantity", recommended),
    ] {
        if value < 0 {
            return Err(DashboardError::NegativeQuantity { field, value });
        }
    }

    Ok(if quantity < minimum {
        StockLevel::BelowMinimum
    } else if quantity < recommended {
        StockLevel::BelowRecommended
    } else {
        StockLevel::Adequate
    })
}
