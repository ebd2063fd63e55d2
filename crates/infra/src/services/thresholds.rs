use chrono::Utc;

use stockgrid_core::{DomainError, DomainResult, ItemId, LocationId, ThresholdId};
use stockgrid_inventory::{AtpThreshold, NewThreshold, ThresholdUpdate};

use super::{ItemStore, LocationStore, ThresholdStore};

/// CRUD over ATP thresholds.
///
/// Enforces at most one threshold per (item, location) pair.
#[derive(Clone)]
pub struct AtpThresholdService {
    thresholds: ThresholdStore,
    items: ItemStore,
    locations: LocationStore,
}

impl AtpThresholdService {
    pub fn new(thresholds: ThresholdStore, items: ItemStore, locations: LocationStore) -> Self {
        Self {
            thresholds,
            items,
            locations,
        }
    }

    pub fn create(&self, new: NewThreshold) -> DomainResult<AtpThreshold> {
        if self.items.get(&new.item_id).is_none() {
            return Err(DomainError::missing_reference(format!(
                "item {} does not exist",
                new.item_id
            )));
        }
        if self.locations.get(&new.location_id).is_none() {
            return Err(DomainError::missing_reference(format!(
                "location {} does not exist",
                new.location_id
            )));
        }
        if self.find_by_pair(new.item_id, new.location_id).is_some() {
            return Err(DomainError::conflict(format!(
                "threshold already exists for item {} at location {}",
                new.item_id, new.location_id
            )));
        }

        let id = ThresholdId::new();
        let threshold = AtpThreshold::create(id, new, Utc::now())?;
        self.thresholds.upsert(id, threshold.clone());
        Ok(threshold)
    }

    pub fn get(&self, id: ThresholdId) -> DomainResult<AtpThreshold> {
        self.thresholds.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn update(&self, id: ThresholdId, update: ThresholdUpdate) -> DomainResult<AtpThreshold> {
        let mut threshold = self.get(id)?;
        threshold.apply_update(update, Utc::now())?;
        self.thresholds.upsert(id, threshold.clone());
        Ok(threshold)
    }

    pub fn delete(&self, id: ThresholdId) -> DomainResult<()> {
        if self.thresholds.remove(&id) {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    /// The threshold for an (item, location) pair, if one is configured.
    pub fn find_by_pair(&self, item_id: ItemId, location_id: LocationId) -> Option<AtpThreshold> {
        self.thresholds
            .list()
            .into_iter()
            .find(|t| t.item_id == item_id && t.location_id == location_id)
    }

    /// All thresholds configured for an item, across locations.
    pub fn for_item(&self, item_id: ItemId) -> Vec<AtpThreshold> {
        self.thresholds
            .list()
            .into_iter()
            .filter(|t| t.item_id == item_id)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.thresholds.len()
    }
}
