//! Application services: business rules over the repository layer.

use std::sync::Arc;

use stockgrid_auth::UserAccount;
use stockgrid_core::{DemandId, ItemId, LocationId, SupplyId, ThresholdId, UserId};
use stockgrid_inventory::{AtpThreshold, Demand, Item, Location, Supply};

use crate::repository::KeyedStore;

mod availability;
mod dashboard;
mod demand;
mod items;
mod locations;
mod supply;
mod thresholds;
mod users;

pub use availability::AvailabilityService;
pub use dashboard::{DashboardService, DashboardSummary, DemandTotals, SupplyTotals};
pub use demand::{DemandService, DemandSummary};
pub use items::ItemService;
pub use locations::LocationService;
pub use supply::{SupplyService, SupplySummary};
pub use thresholds::AtpThresholdService;
pub use users::UserService;

/// Shared handle to one collection's store.
pub type DynStore<K, V> = Arc<dyn KeyedStore<K, V>>;

pub type ItemStore = DynStore<ItemId, Item>;
pub type LocationStore = DynStore<LocationId, Location>;
pub type SupplyStore = DynStore<SupplyId, Supply>;
pub type DemandStore = DynStore<DemandId, Demand>;
pub type ThresholdStore = DynStore<ThresholdId, AtpThreshold>;
pub type UserStore = DynStore<UserId, UserAccount>;
