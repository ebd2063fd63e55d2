use chrono::Utc;
use serde::{Deserialize, Serialize};

use stockgrid_core::{DomainError, DomainResult, ItemId, LocationId, SupplyId};
use stockgrid_inventory::{NewSupply, Supply, SupplyType, SupplyUpdate};

use super::{ItemStore, LocationStore, SupplyStore};

/// Per-type quantity totals for an item (optionally scoped to a location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplySummary {
    pub item_id: ItemId,
    pub location_id: Option<LocationId>,
    pub on_hand: i64,
    pub in_transit: i64,
    pub damaged: i64,
    pub total: i64,
}

/// CRUD over the supply collection, with referential integrity against items
/// and locations.
#[derive(Clone)]
pub struct SupplyService {
    supplies: SupplyStore,
    items: ItemStore,
    locations: LocationStore,
}

impl SupplyService {
    pub fn new(supplies: SupplyStore, items: ItemStore, locations: LocationStore) -> Self {
        Self {
            supplies,
            items,
            locations,
        }
    }

    fn ensure_references(&self, item_id: ItemId, location_id: LocationId) -> DomainResult<()> {
        if self.items.get(&item_id).is_none() {
            return Err(DomainError::missing_reference(format!("item {item_id} does not exist")));
        }
        if self.locations.get(&location_id).is_none() {
            return Err(DomainError::missing_reference(format!(
                "location {location_id} does not exist"
            )));
        }
        Ok(())
    }

    pub fn create(&self, new: NewSupply) -> DomainResult<Supply> {
        self.ensure_references(new.item_id, new.location_id)?;

        let id = SupplyId::new();
        let supply = Supply::create(id, new, Utc::now())?;
        self.supplies.upsert(id, supply.clone());
        tracing::debug!(supply_id = %id, item_id = %supply.item_id, "supply recorded");
        Ok(supply)
    }

    pub fn get(&self, id: SupplyId) -> DomainResult<Supply> {
        self.supplies.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn update(&self, id: SupplyId, update: SupplyUpdate) -> DomainResult<Supply> {
        let mut supply = self.get(id)?;
        supply.apply_update(update, Utc::now())?;
        self.supplies.upsert(id, supply.clone());
        Ok(supply)
    }

    pub fn delete(&self, id: SupplyId) -> DomainResult<()> {
        if self.supplies.remove(&id) {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    /// All supply records for an item, optionally narrowed to one location.
    pub fn for_item(&self, item_id: ItemId, location_id: Option<LocationId>) -> Vec<Supply> {
        let mut matching: Vec<Supply> = self
            .supplies
            .list()
            .into_iter()
            .filter(|s| s.item_id == item_id)
            .filter(|s| location_id.is_none_or(|loc| s.location_id == loc))
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.as_uuid().cmp(b.id.as_uuid())));
        matching
    }

    /// Per-type totals for an item, optionally narrowed to one location.
    pub fn summary(&self, item_id: ItemId, location_id: Option<LocationId>) -> DomainResult<SupplySummary> {
        if self.items.get(&item_id).is_none() {
            return Err(DomainError::NotFound);
        }

        let mut summary = SupplySummary {
            item_id,
            location_id,
            on_hand: 0,
            in_transit: 0,
            damaged: 0,
            total: 0,
        };

        for supply in self.for_item(item_id, location_id) {
            match supply.supply_type {
                SupplyType::OnHand => summary.on_hand += supply.quantity,
                SupplyType::InTransit => summary.in_transit += supply.quantity,
                SupplyType::Damaged => summary.damaged += supply.quantity,
            }
            summary.total += supply.quantity;
        }

        Ok(summary)
    }

    /// Every supply record, unfiltered (dashboard aggregation).
    pub fn all_records(&self) -> Vec<Supply> {
        self.supplies.list()
    }

    pub fn count(&self) -> usize {
        self.supplies.len()
    }
}
