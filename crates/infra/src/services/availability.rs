use stockgrid_core::{DomainError, DomainResult, ItemId, LocationId};
use stockgrid_inventory::availability::{committed_demand, promisable_supply, AvailabilityReport, StockLevel};

use super::{AtpThresholdService, DemandService, ItemService, SupplyService};

/// Availability computation across supply, demand and thresholds.
#[derive(Clone)]
pub struct AvailabilityService {
    items: ItemService,
    supply: SupplyService,
    demand: DemandService,
    thresholds: AtpThresholdService,
}

impl AvailabilityService {
    pub fn new(
        items: ItemService,
        supply: SupplyService,
        demand: DemandService,
        thresholds: AtpThresholdService,
    ) -> Self {
        Self {
            items,
            supply,
            demand,
            thresholds,
        }
    }

    /// Availability of an item at one location, classified against that
    /// pair's threshold (UNKNOWN when none is configured).
    pub fn at_location(&self, item_id: ItemId, location_id: LocationId) -> DomainResult<AvailabilityReport> {
        if !self.items.exists(item_id) {
            return Err(DomainError::NotFound);
        }

        let supplies = self.supply.for_item(item_id, Some(location_id));
        let demands = self.demand.for_item(item_id, Some(location_id));

        let supply_quantity = promisable_supply(&supplies);
        let demand_quantity = committed_demand(&demands);
        let net = supply_quantity - demand_quantity;

        let threshold = self.thresholds.find_by_pair(item_id, location_id);
        Ok(AvailabilityReport {
            item_id,
            location_id: Some(location_id),
            supply_quantity,
            demand_quantity,
            net_available: net,
            stock_level: StockLevel::classify(net, threshold.as_ref()),
        })
    }

    /// Network-wide availability of an item (all locations).
    ///
    /// With no single threshold row to compare against, classification uses
    /// the element-wise sum of every threshold configured for the item;
    /// UNKNOWN when the item has none.
    pub fn network(&self, item_id: ItemId) -> DomainResult<AvailabilityReport> {
        if !self.items.exists(item_id) {
            return Err(DomainError::NotFound);
        }

        let supplies = self.supply.for_item(item_id, None);
        let demands = self.demand.for_item(item_id, None);

        let supply_quantity = promisable_supply(&supplies);
        let demand_quantity = committed_demand(&demands);
        let net = supply_quantity - demand_quantity;

        let thresholds = self.thresholds.for_item(item_id);
        let stock_level = if thresholds.is_empty() {
            StockLevel::Unknown
        } else {
            let min: i64 = thresholds.iter().map(|t| t.min_threshold).sum();
            let max: i64 = thresholds.iter().map(|t| t.max_threshold).sum();
            StockLevel::classify_bounds(net, min, max)
        };

        Ok(AvailabilityReport {
            item_id,
            location_id: None,
            supply_quantity,
            demand_quantity,
            net_available: net,
            stock_level,
        })
    }
}
