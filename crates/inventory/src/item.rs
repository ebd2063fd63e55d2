use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgrid_core::{DomainError, DomainResult, ItemId};

/// Lifecycle status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Active,
    Discontinued,
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemStatus::Active => f.write_str("ACTIVE"),
            ItemStatus::Discontinued => f.write_str("DISCONTINUED"),
        }
    }
}

/// A sellable/stockable product.
///
/// # Invariants
/// - SKU and name are non-empty (trimmed on the way in).
/// - `price_cents` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: ItemStatus,
    /// Unit price in minor currency units (cents).
    pub price_cents: i64,
    pub pickup_allowed: bool,
    pub shipping_allowed: bool,
    pub delivery_allowed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_cents: i64,
    pub pickup_allowed: bool,
    pub shipping_allowed: bool,
    pub delivery_allowed: bool,
}

/// Partial update of an item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<ItemStatus>,
    pub price_cents: Option<i64>,
    pub pickup_allowed: Option<bool>,
    pub shipping_allowed: Option<bool>,
    pub delivery_allowed: Option<bool>,
}

impl Item {
    pub fn create(id: ItemId, new: NewItem, now: DateTime<Utc>) -> DomainResult<Self> {
        let sku = new.sku.trim().to_string();
        if sku.is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if new.price_cents < 0 {
            return Err(DomainError::validation("price cannot be negative"));
        }

        Ok(Self {
            id,
            sku,
            name,
            description: new.description,
            category: new.category,
            status: ItemStatus::Active,
            price_cents: new.price_cents,
            pickup_allowed: new.pickup_allowed,
            shipping_allowed: new.shipping_allowed,
            delivery_allowed: new.delivery_allowed,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_update(&mut self, update: ItemUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(price) = update.price_cents {
            if price < 0 {
                return Err(DomainError::validation("price cannot be negative"));
            }
            self.price_cents = price;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(v) = update.pickup_allowed {
            self.pickup_allowed = v;
        }
        if let Some(v) = update.shipping_allowed {
            self.shipping_allowed = v;
        }
        if let Some(v) = update.delivery_allowed {
            self.delivery_allowed = v;
        }

        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_widget() -> NewItem {
        NewItem {
            sku: "SKU-001".to_string(),
            name: "Widget".to_string(),
            description: None,
            category: Some("gadgets".to_string()),
            price_cents: 1_999,
            pickup_allowed: true,
            shipping_allowed: true,
            delivery_allowed: false,
        }
    }

    #[test]
    fn create_item_success() {
        let item = Item::create(ItemId::new(), new_widget(), Utc::now()).unwrap();
        assert_eq!(item.sku, "SKU-001");
        assert_eq!(item.status, ItemStatus::Active);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn create_item_rejects_blank_sku() {
        let mut new = new_widget();
        new.sku = "   ".to_string();
        let result = Item::create(ItemId::new(), new, Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_item_rejects_negative_price() {
        let mut new = new_widget();
        new.price_cents = -1;
        let result = Item::create(ItemId::new(), new, Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn update_touches_updated_at_only() {
        let created = Utc::now();
        let mut item = Item::create(ItemId::new(), new_widget(), created).unwrap();
        let later = created + chrono::Duration::seconds(30);

        item.apply_update(
            ItemUpdate {
                status: Some(ItemStatus::Discontinued),
                ..Default::default()
            },
            later,
        )
        .unwrap();

        assert_eq!(item.status, ItemStatus::Discontinued);
        assert_eq!(item.created_at, created);
        assert_eq!(item.updated_at, later);
    }

    #[test]
    fn update_rejects_blank_name() {
        let mut item = Item::create(ItemId::new(), new_widget(), Utc::now()).unwrap();
        let result = item.apply_update(
            ItemUpdate {
                name: Some(String::new()),
                ..Default::default()
            },
            Utc::now(),
        );
        assert!(result.is_err());
        assert_eq!(item.name, "Widget");
    }
}
