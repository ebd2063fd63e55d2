use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgrid_core::{DomainError, DomainResult, LocationId};

/// Kind of physical site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// Distribution center.
    Dc,
    Store,
    Vendor,
}

impl core::fmt::Display for LocationType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LocationType::Dc => f.write_str("DC"),
            LocationType::Store => f.write_str("STORE"),
            LocationType::Vendor => f.write_str("VENDOR"),
        }
    }
}

impl core::str::FromStr for LocationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DC" => Ok(LocationType::Dc),
            "STORE" => Ok(LocationType::Store),
            "VENDOR" => Ok(LocationType::Vendor),
            other => Err(DomainError::validation(format!(
                "unknown location type '{other}' (expected DC, STORE or VENDOR)"
            ))),
        }
    }
}

/// Postal address of a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

/// A physical site holding or requesting stock.
///
/// # Invariants
/// - Name is non-empty (trimmed on the way in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub location_type: LocationType,
    pub pickup_allowed: bool,
    pub shipping_allowed: bool,
    pub delivery_allowed: bool,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub location_type: LocationType,
    pub pickup_allowed: bool,
    pub shipping_allowed: bool,
    pub delivery_allowed: bool,
    #[serde(default)]
    pub address: Address,
}

/// Partial update of a location. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub name: Option<String>,
    pub location_type: Option<LocationType>,
    pub pickup_allowed: Option<bool>,
    pub shipping_allowed: Option<bool>,
    pub delivery_allowed: Option<bool>,
    pub address: Option<Address>,
}

impl Location {
    pub fn create(id: LocationId, new: NewLocation, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            location_type: new.location_type,
            pickup_allowed: new.pickup_allowed,
            shipping_allowed: new.shipping_allowed,
            delivery_allowed: new.delivery_allowed,
            address: new.address,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply_update(&mut self, update: LocationUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(location_type) = update.location_type {
            self.location_type = location_type;
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
        if let Some(address) = update.address {
            self.address = address;
        }

        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_location_success() {
        let loc = Location::create(
            LocationId::new(),
            NewLocation {
                name: "East DC".to_string(),
                location_type: LocationType::Dc,
                pickup_allowed: false,
                shipping_allowed: true,
                delivery_allowed: true,
                address: Address::default(),
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(loc.name, "East DC");
        assert_eq!(loc.location_type, LocationType::Dc);
    }

    #[test]
    fn create_location_rejects_blank_name() {
        let result = Location::create(
            LocationId::new(),
            NewLocation {
                name: " ".to_string(),
                location_type: LocationType::Store,
                pickup_allowed: true,
                shipping_allowed: false,
                delivery_allowed: false,
                address: Address::default(),
            },
            Utc::now(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn location_type_parses_wire_form() {
        assert_eq!("DC".parse::<LocationType>().unwrap(), LocationType::Dc);
        assert_eq!("STORE".parse::<LocationType>().unwrap(), LocationType::Store);
        assert!("WAREHOUSE".parse::<LocationType>().is_err());
    }
}
