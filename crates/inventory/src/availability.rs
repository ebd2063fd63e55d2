//! Availability computation and stock-level classification.
//!
//! Pure functions over supply/demand slices; the service layer decides which
//! records "match" (item, optional location) before calling in here.

use serde::{Deserialize, Serialize};

use stockgrid_core::{ItemId, LocationId};

use crate::demand::Demand;
use crate::supply::Supply;
use crate::threshold::AtpThreshold;

/// Traffic-light tier for an availability figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockLevel {
    Red,
    Yellow,
    Green,
    /// No threshold configured for the scope in question.
    Unknown,
}

impl StockLevel {
    /// Classify a net availability figure against min/max bounds.
    ///
    /// - `net < min` → Red
    /// - `net > max` → Green
    /// - otherwise (min and max inclusive) → Yellow
    pub fn classify_bounds(net: i64, min: i64, max: i64) -> Self {
        if net < min {
            StockLevel::Red
        } else if net > max {
            StockLevel::Green
        } else {
            StockLevel::Yellow
        }
    }

    /// Classify against an optional threshold record.
    pub fn classify(net: i64, threshold: Option<&AtpThreshold>) -> Self {
        match threshold {
            Some(t) => Self::classify_bounds(net, t.min_threshold, t.max_threshold),
            None => StockLevel::Unknown,
        }
    }
}

impl core::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockLevel::Red => f.write_str("RED"),
            StockLevel::Yellow => f.write_str("YELLOW"),
            StockLevel::Green => f.write_str("GREEN"),
            StockLevel::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// Total promisable supply quantity (damaged stock excluded).
pub fn promisable_supply<'a>(supplies: impl IntoIterator<Item = &'a Supply>) -> i64 {
    supplies
        .into_iter()
        .filter(|s| s.supply_type.is_promisable())
        .map(|s| s.quantity)
        .sum()
}

/// Total committed demand quantity.
pub fn committed_demand<'a>(demands: impl IntoIterator<Item = &'a Demand>) -> i64 {
    demands
        .into_iter()
        .filter(|d| d.demand_type.is_committed())
        .map(|d| d.quantity)
        .sum()
}

/// Net availability: promisable supply minus committed demand.
///
/// May be negative when an item is over-promised.
pub fn net_available(supplies: &[Supply], demands: &[Demand]) -> i64 {
    promisable_supply(supplies) - committed_demand(demands)
}

/// Availability figure for an item, optionally scoped to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub item_id: ItemId,
    /// `None` means network-wide (all locations).
    pub location_id: Option<LocationId>,
    pub supply_quantity: i64,
    pub demand_quantity: i64,
    pub net_available: i64,
    pub stock_level: StockLevel,
}
