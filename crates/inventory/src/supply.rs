use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgrid_core::{DomainError, DomainResult, ItemId, LocationId, SupplyId};

/// Classification of a supply quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplyType {
    OnHand,
    InTransit,
    Damaged,
}

impl SupplyType {
    /// All supply types, in summary display order.
    pub const ALL: [SupplyType; 3] = [SupplyType::OnHand, SupplyType::InTransit, SupplyType::Damaged];

    /// Whether this supply counts toward available-to-promise.
    ///
    /// Damaged stock is physically present but never promisable.
    pub fn is_promisable(self) -> bool {
        match self {
            SupplyType::OnHand | SupplyType::InTransit => true,
            SupplyType::Damaged => false,
        }
    }
}

impl core::fmt::Display for SupplyType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SupplyType::OnHand => f.write_str("ON_HAND"),
            SupplyType::InTransit => f.write_str("IN_TRANSIT"),
            SupplyType::Damaged => f.write_str("DAMAGED"),
        }
    }
}

impl core::str::FromStr for SupplyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON_HAND" => Ok(SupplyType::OnHand),
            "IN_TRANSIT" => Ok(SupplyType::InTransit),
            "DAMAGED" => Ok(SupplyType::Damaged),
            other => Err(DomainError::validation(format!(
                "unknown supply type '{other}' (expected ON_HAND, IN_TRANSIT or DAMAGED)"
            ))),
        }
    }
}

/// A quantity of an item held at a location.
///
/// # Invariants
/// - `quantity` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    pub id: SupplyId,
    pub item_id: ItemId,
    pub location_id: LocationId,
    pub supply_type: SupplyType,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a supply record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupply {
    pub item_id: ItemId,
    pub location_id: LocationId,
    pub supply_type: SupplyType,
    pub quantity: i64,
}

/// Partial update of a supply record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyUpdate {
    pub supply_type: Option<SupplyType>,
    pub quantity: Option<i64>,
}

impl Supply {
    pub fn create(id: SupplyId, new: NewSupply, now: DateTime<Utc>) -> DomainResult<Self> {
        if new.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }

        Ok(Self {
            id,
            item_id: new.item_id,
            location_id: new.location_id,
            supply_type: new.supply_type,
            quantity: new.quantity,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_update(&mut self, update: SupplyUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(quantity) = update.quantity {
            if quantity < 0 {
                return Err(DomainError::validation("quantity cannot be negative"));
            }
            self.quantity = quantity;
        }
        if let Some(supply_type) = update.supply_type {
            self.supply_type = supply_type;
        }

        self.updated_at = now;
        Ok(())
    }
}
