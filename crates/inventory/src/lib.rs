//! `stockgrid-inventory` — pure inventory domain model.
//!
//! Entities (items, locations, supply, demand, ATP thresholds) and the
//! availability rules that operate on them. No storage or HTTP concerns.

pub mod availability;
pub mod demand;
pub mod item;
pub mod location;
pub mod supply;
pub mod threshold;

pub use availability::{AvailabilityReport, StockLevel, committed_demand, net_available, promisable_supply};
pub use demand::{Demand, DemandType, DemandUpdate, NewDemand};
pub use item::{Item, ItemStatus, ItemUpdate, NewItem};
pub use location::{Address, Location, LocationType, LocationUpdate, NewLocation};
pub use supply::{NewSupply, Supply, SupplyType, SupplyUpdate};
pub use threshold::{AtpThreshold, NewThreshold, ThresholdUpdate};
