use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgrid_core::{DemandId, DomainError, DomainResult, ItemId, LocationId};

/// Classification of a demand quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandType {
    HardPromised,
    Planned,
}

impl DemandType {
    /// All demand types, in summary display order.
    pub const ALL: [DemandType; 2] = [DemandType::HardPromised, DemandType::Planned];

    /// Whether this demand counts against available-to-promise.
    ///
    /// Both hard-promised and planned demand reduce what can still be
    /// promised; the tag distinguishes commitment strength for reporting.
    pub fn is_committed(self) -> bool {
        match self {
            DemandType::HardPromised | DemandType::Planned => true,
        }
    }
}

impl core::fmt::Display for DemandType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DemandType::HardPromised => f.write_str("HARD_PROMISED"),
            DemandType::Planned => f.write_str("PLANNED"),
        }
    }
}

impl core::str::FromStr for DemandType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HARD_PROMISED" => Ok(DemandType::HardPromised),
            "PLANNED" => Ok(DemandType::Planned),
            other => Err(DomainError::validation(format!(
                "unknown demand type '{other}' (expected HARD_PROMISED or PLANNED)"
            ))),
        }
    }
}

/// A quantity of an item requested at a location.
///
/// # Invariants
/// - `quantity` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    pub id: DemandId,
    pub item_id: ItemId,
    pub location_id: LocationId,
    pub demand_type: DemandType,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a demand record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDemand {
    pub item_id: ItemId,
    pub location_id: LocationId,
    pub demand_type: DemandType,
    pub quantity: i64,
}

/// Partial update of a demand record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandUpdate {
    pub demand_type: Option<DemandType>,
    pub quantity: Option<i64>,
}

impl Demand {
    pub fn create(id: DemandId, new: NewDemand, now: DateTime<Utc>) -> DomainResult<Self> {
        if new.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }

        Ok(Self {
            id,
            item_id: new.item_id,
            location_id: new.location_id,
            demand_type: new.demand_type,
            quantity: new.quantity,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_update(&mut self, update: DemandUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(quantity) = update.quantity {
            if quantity < 0 {
                return Err(DomainError::validation("quantity cannot be negative"));
            }
            self.quantity = quantity;
        }
        if let Some(demand_type) = update.demand_type {
            self.demand_type = demand_type;
        }

        self.updated_at = now;
        Ok(())
    }
}
