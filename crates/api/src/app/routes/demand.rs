use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use stockgrid_core::{DemandId, ItemId};
use stockgrid_inventory::{DemandUpdate, NewDemand};

use crate::app::dto::ScopeQuery;
use crate::app::{errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_demand))
        .route("/:id", get(get_demand).put(update_demand).delete(delete_demand))
        .route("/item/:item_id", get(list_for_item))
        .route("/item/:item_id/summary", get(summary_for_item))
}

async fn create_demand(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<NewDemand>,
) -> Response {
    if let Err(e) = authz::require(&principal, "demand.write") {
        return errors::forbidden(e);
    }
    match services.demand.create(body) {
        Ok(demand) => (StatusCode::CREATED, Json(demand)).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn get_demand(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "demand.read") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<DemandId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.demand.get(id) {
        Ok(demand) => Json(demand).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn update_demand(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<DemandUpdate>,
) -> Response {
    if let Err(e) = authz::require(&principal, "demand.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<DemandId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.demand.update(id, body) {
        Ok(demand) => Json(demand).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn delete_demand(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "demand.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<DemandId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.demand.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn list_for_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(item_id): Path<String>,
    Query(scope): Query<ScopeQuery>,
) -> Response {
    if let Err(e) = authz::require(&principal, "demand.read") {
        return errors::forbidden(e);
    }
    let item_id = match item_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    Json(services.demand.for_item(item_id, scope.location_id)).into_response()
}

async fn summary_for_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(item_id): Path<String>,
    Query(scope): Query<ScopeQuery>,
) -> Response {
    if let Err(e) = authz::require(&principal, "demand.read") {
        return errors::forbidden(e);
    }
    let item_id = match item_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.demand.summary(item_id, scope.location_id) {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => errors::domain_error(e),
    }
}
