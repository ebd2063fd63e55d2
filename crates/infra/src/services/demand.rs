use chrono::Utc;
use serde::{Deserialize, Serialize};

use stockgrid_core::{DemandId, DomainError, DomainResult, ItemId, LocationId};
use stockgrid_inventory::{Demand, DemandType, DemandUpdate, NewDemand};

use super::{DemandStore, ItemStore, LocationStore};

/// Per-type quantity totals for an item (optionally scoped to a location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandSummary {
    pub item_id: ItemId,
    pub location_id: Option<LocationId>,
    pub hard_promised: i64,
    pub planned: i64,
    pub total: i64,
}

/// CRUD over the demand collection, with referential integrity against items
/// and locations.
#[derive(Clone)]
pub struct DemandService {
    demands: DemandStore,
    items: ItemStore,
    locations: LocationStore,
}

impl DemandService {
    pub fn new(demands: DemandStore, items: ItemStore, locations: LocationStore) -> Self {
        Self {
            demands,
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

    pub fn create(&self, new: NewDemand) -> DomainResult<Demand> {
        self.ensure_references(new.item_id, new.location_id)?;

        let id = DemandId::new();
        let demand = Demand::create(id, new, Utc::now())?;
        self.demands.upsert(id, demand.clone());
        tracing::debug!(demand_id = %id, item_id = %demand.item_id, "demand recorded");
        Ok(demand)
    }

    pub fn get(&self, id: DemandId) -> DomainResult<Demand> {
        self.demands.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn update(&self, id: DemandId, update: DemandUpdate) -> DomainResult<Demand> {
        let mut demand = self.get(id)?;
        demand.apply_update(update, Utc::now())?;
        self.demands.upsert(id, demand.clone());
        Ok(demand)
    }

    pub fn delete(&self, id: DemandId) -> DomainResult<()> {
        if self.demands.remove(&id) {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    /// All demand records for an item, optionally narrowed to one location.
    pub fn for_item(&self, item_id: ItemId, location_id: Option<LocationId>) -> Vec<Demand> {
        let mut matching: Vec<Demand> = self
            .demands
            .list()
            .into_iter()
            .filter(|d| d.item_id == item_id)
            .filter(|d| location_id.is_none_or(|loc| d.location_id == loc))
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.as_uuid().cmp(b.id.as_uuid())));
        matching
    }

    /// Per-type totals for an item, optionally narrowed to one location.
    pub fn summary(&self, item_id: ItemId, location_id: Option<LocationId>) -> DomainResult<DemandSummary> {
        if self.items.get(&item_id).is_none() {
            return Err(DomainError::NotFound);
        }

        let mut summary = DemandSummary {
            item_id,
            location_id,
            hard_promised: 0,
            planned: 0,
            total: 0,
        };

        for demand in self.for_item(item_id, location_id) {
            match demand.demand_type {
                DemandType::HardPromised => summary.hard_promised += demand.quantity,
                DemandType::Planned => summary.planned += demand.quantity,
            }
            summary.total += demand.quantity;
        }

        Ok(summary)
    }

    /// Every demand record, unfiltered (dashboard aggregation).
    pub fn all_records(&self) -> Vec<Demand> {
        self.demands.list()
    }

    pub fn count(&self) -> usize {
        self.demands.len()
    }
}
