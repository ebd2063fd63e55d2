//! Route modules, one per API area.

use axum::routing::get;
use axum::Router;

pub mod availability;
pub mod dashboard;
pub mod demand;
pub mod items;
pub mod locations;
pub mod supply;
pub mod system;
pub mod thresholds;
pub mod users;

/// Everything behind the bearer-token middleware.
pub fn protected_router() -> Router {
    Router::new()
        .route("/whoami", get(users::whoami))
        .route("/dashboard", get(dashboard::summary))
        .nest("/items", items::router())
        .nest("/locations", locations::router())
        .nest("/supply", supply::router())
        .nest("/demand", demand::router())
        .nest("/availability", availability::router())
        .nest("/thresholds", thresholds::router())
}
