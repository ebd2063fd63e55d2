use std::sync::Arc;

use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};

use stockgrid_core::{ItemId, LocationId};

use crate::app::{errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/:item_id", get(network))
        .route("/:item_id/at/:location_id", get(at_location))
}

async fn network(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(item_id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "availability.read") {
        return errors::forbidden(e);
    }
    let item_id = match item_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.availability.network(item_id) {
        Ok(report) => Json(report).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn at_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path((item_id, location_id)): Path<(String, String)>,
) -> Response {
    if let Err(e) = authz::require(&principal, "availability.read") {
        return errors::forbidden(e);
    }
    let item_id = match item_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    let location_id = match location_id.parse::<LocationId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.availability.at_location(item_id, location_id) {
        Ok(report) => Json(report).into_response(),
        Err(e) => errors::domain_error(e),
    }
}
