use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use stockgrid_auth::{Hs256Jwt, JwtClaims, JwtError, UserAccount};
use stockgrid_infra::services::{
    AtpThresholdService, AvailabilityService, DashboardService, DemandService, DemandStore,
    ItemService, ItemStore, LocationService, LocationStore, SupplyService, SupplyStore,
    ThresholdStore, UserService, UserStore,
};
use stockgrid_infra::InMemoryStore;

/// Fully wired service graph shared by all handlers.
pub struct AppServices {
    pub items: ItemService,
    pub locations: LocationService,
    pub supply: SupplyService,
    pub demand: DemandService,
    pub thresholds: AtpThresholdService,
    pub availability: AvailabilityService,
    pub dashboard: DashboardService,
    pub users: UserService,
    pub jwt: Arc<Hs256Jwt>,
    pub token_ttl: Duration,
}

impl AppServices {
    /// Wire every service over fresh in-memory stores.
    pub fn new(jwt: Arc<Hs256Jwt>, token_ttl: Duration) -> Self {
        let item_store: ItemStore = Arc::new(InMemoryStore::new());
        let location_store: LocationStore = Arc::new(InMemoryStore::new());
        let supply_store: SupplyStore = Arc::new(InMemoryStore::new());
        let demand_store: DemandStore = Arc::new(InMemoryStore::new());
        let threshold_store: ThresholdStore = Arc::new(InMemoryStore::new());
        let user_store: UserStore = Arc::new(InMemoryStore::new());

        let items = ItemService::new(item_store.clone());
        let locations = LocationService::new(location_store.clone());
        let supply = SupplyService::new(supply_store, item_store.clone(), location_store.clone());
        let demand = DemandService::new(demand_store, item_store.clone(), location_store.clone());
        let thresholds = AtpThresholdService::new(threshold_store, item_store, location_store);
        let availability = AvailabilityService::new(
            items.clone(),
            supply.clone(),
            demand.clone(),
            thresholds.clone(),
        );
        let dashboard = DashboardService::new(
            items.clone(),
            locations.clone(),
            supply.clone(),
            demand.clone(),
            thresholds.clone(),
        );
        let users = UserService::new(user_store);

        Self {
            items,
            locations,
            supply,
            demand,
            thresholds,
            availability,
            dashboard,
            users,
            jwt,
            token_ttl,
        }
    }

    /// Sign a token for an authenticated user.
    pub fn issue_token(&self, user: &UserAccount) -> Result<(String, DateTime<Utc>), JwtError> {
        let now = Utc::now();
        let expires_at = now + self.token_ttl;
        let claims = JwtClaims {
            sub: user.id,
            roles: user.roles.clone(),
            issued_at: now,
            expires_at,
        };
        let token = self.jwt.issue(&claims)?;
        Ok((token, expires_at))
    }
}
