use chrono::Utc;

use stockgrid_core::{DomainError, DomainResult, LocationId, Page, PageRequest};
use stockgrid_inventory::{Location, LocationUpdate, NewLocation};

use super::LocationStore;

/// CRUD over the location collection.
#[derive(Clone)]
pub struct LocationService {
    locations: LocationStore,
}

impl LocationService {
    pub fn new(locations: LocationStore) -> Self {
        Self { locations }
    }

    pub fn create(&self, new: NewLocation) -> DomainResult<Location> {
        let id = LocationId::new();
        let location = Location::create(id, new, Utc::now())?;
        self.locations.upsert(id, location.clone());
        tracing::debug!(location_id = %id, name = %location.name, "location created");
        Ok(location)
    }

    pub fn get(&self, id: LocationId) -> DomainResult<Location> {
        self.locations.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn update(&self, id: LocationId, update: LocationUpdate) -> DomainResult<Location> {
        let mut location = self.get(id)?;
        location.apply_update(update, Utc::now())?;
        self.locations.upsert(id, location.clone());
        Ok(location)
    }

    pub fn delete(&self, id: LocationId) -> DomainResult<()> {
        if self.locations.remove(&id) {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    pub fn list(&self, request: PageRequest) -> Page<Location> {
        let mut all = self.locations.list();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.as_uuid().cmp(b.id.as_uuid())));
        Page::from_vec(all, request)
    }

    pub fn exists(&self, id: LocationId) -> bool {
        self.locations.get(&id).is_some()
    }

    pub fn count(&self) -> usize {
        self.locations.len()
    }
}
