use serde::{Deserialize, Serialize};

use stockgrid_inventory::{DemandType, SupplyType};

use super::{DemandService, ItemService, LocationService, SupplyService, AtpThresholdService};

/// Supply quantity totals across all items and locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyTotals {
    pub on_hand: i64,
    pub in_transit: i64,
    pub damaged: i64,
}

/// Demand quantity totals across all items and locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandTotals {
    pub hard_promised: i64,
    pub planned: i64,
}

/// Aggregate view over every collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub item_count: usize,
    pub location_count: usize,
    pub supply_record_count: usize,
    pub demand_record_count: usize,
    pub threshold_count: usize,
    pub supply_totals: SupplyTotals,
    pub demand_totals: DemandTotals,
}

/// Read-only aggregation across collections for the dashboard endpoint.
#[derive(Clone)]
pub struct DashboardService {
    items: ItemService,
    locations: LocationService,
    supply: SupplyService,
    demand: DemandService,
    thresholds: AtpThresholdService,
}

impl DashboardService {
    pub fn new(
        items: ItemService,
        locations: LocationService,
        supply: SupplyService,
        demand: DemandService,
        thresholds: AtpThresholdService,
    ) -> Self {
        Self {
            items,
            locations,
            supply,
            demand,
            thresholds,
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        let mut supply_totals = SupplyTotals::default();
        for supply in self.supply.all_records() {
            match supply.supply_type {
                SupplyType::OnHand => supply_totals.on_hand += supply.quantity,
                SupplyType::InTransit => supply_totals.in_transit += supply.quantity,
                SupplyType::Damaged => supply_totals.damaged += supply.quantity,
            }
        }

        let mut demand_totals = DemandTotals::default();
        for demand in self.demand.all_records() {
            match demand.demand_type {
                DemandType::HardPromised => demand_totals.hard_promised += demand.quantity,
                DemandType::Planned => demand_totals.planned += demand.quantity,
            }
        }

        DashboardSummary {
            item_count: self.items.count(),
            location_count: self.locations.count(),
            supply_record_count: self.supply.count(),
            demand_record_count: self.demand.count(),
            threshold_count: self.thresholds.count(),
            supply_totals,
            demand_totals,
        }
    }
}
