//! Bank-wide low inventory report.

use pantry_core::source::InventoryLevel;
use serde::Serialize;

use crate::error::DashboardError;
use crate::threshold::{StockLevel, classify};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowInventoryEntry {
    pub storage_location_name: String,
    pub item_name: String,
    pub quantity: i64,
    pub minimum: i64,
    pub recommended: i64,
    pub level: StockLevel,
}

/// Classify every item/location pairing and keep the ones below a
/// threshold, in source order.
///
/// An empty report does not say whether inventory is adequate or simply
/// untracked; both read as "at recommended levels".
pub fn report(levels: Vec<InventoryLevel>) -> Result<Vec<LowInventoryEntry>, DashboardError> {
    let mut entries = Vec::new();
    for level in levels {
        let stock = classify(level.quantity, level.minimum, level.recommended)?;
        if stock.is_low() {
            entries.push(LowInventoryEntry {
                storage_location_name: level.storage_location_name,
                item_name: level.item_name,
                quantity: level.quantity,
                minimum: level.minimum,
                recommended: level.recommended,
                level: stock,
            });
        }
    }
    Ok(entries)
}
