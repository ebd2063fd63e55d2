use chrono::Utc;

use stockgrid_core::{DomainError, DomainResult, ItemId, Page, PageRequest};
use stockgrid_inventory::{Item, ItemUpdate, NewItem};

use super::ItemStore;

/// CRUD over the item collection.
#[derive(Clone)]
pub struct ItemService {
    items: ItemStore,
}

impl ItemService {
    pub fn new(items: ItemStore) -> Self {
        Self { items }
    }

    pub fn create(&self, new: NewItem) -> DomainResult<Item> {
        let id = ItemId::new();
        let item = Item::create(id, new, Utc::now())?;
        self.items.upsert(id, item.clone());
        tracing::debug!(item_id = %id, sku = %item.sku, "item created");
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.items.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn update(&self, id: ItemId, update: ItemUpdate) -> DomainResult<Item> {
        let mut item = self.get(id)?;
        item.apply_update(update, Utc::now())?;
        self.items.upsert(id, item.clone());
        Ok(item)
    }

    pub fn delete(&self, id: ItemId) -> DomainResult<()> {
        if self.items.remove(&id) {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    pub fn list(&self, request: PageRequest) -> Page<Item> {
        let mut all = self.items.list();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.as_uuid().cmp(b.id.as_uuid())));
        Page::from_vec(all, request)
    }

    pub fn exists(&self, id: ItemId) -> bool {
        self.items.get(&id).is_some()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}
