use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use stockgrid_core::{ItemId, LocationId, ThresholdId};
use stockgrid_inventory::{NewThreshold, ThresholdUpdate};

use crate::app::{errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_threshold))
        .route(
            "/:id",
            get(get_threshold).put(update_threshold).delete(delete_threshold),
        )
        .route("/item/:item_id/location/:location_id", get(find_by_pair))
}

async fn create_threshold(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<NewThreshold>,
) -> Response {
    if let Err(e) = authz::require(&principal, "thresholds.write") {
        return errors::forbidden(e);
    }
    match services.thresholds.create(body) {
        Ok(threshold) => (StatusCode::CREATED, Json(threshold)).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn get_threshold(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "thresholds.read") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<ThresholdId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.thresholds.get(id) {
        Ok(threshold) => Json(threshold).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn update_threshold(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<ThresholdUpdate>,
) -> Response {
    if let Err(e) = authz::require(&principal, "thresholds.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<ThresholdId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.thresholds.update(id, body) {
        Ok(threshold) => Json(threshold).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn delete_threshold(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "thresholds.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<ThresholdId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.thresholds.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn find_by_pair(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path((item_id, location_id)): Path<(String, String)>,
) -> Response {
    if let Err(e) = authz::require(&principal, "thresholds.read") {
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
    match services.thresholds.find_by_pair(item_id, location_id) {
        Some(threshold) => Json(threshold).into_response(),
        None => errors::domain_error(stockgrid_core::DomainError::NotFound),
    }
}
