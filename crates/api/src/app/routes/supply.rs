use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use stockgrid_core::{ItemId, SupplyId};
use stockgrid_inventory::{NewSupply, SupplyUpdate};

use crate::app::dto::ScopeQuery;
use crate::app::{errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_supply))
        .route("/:id", get(get_supply).put(update_supply).delete(delete_supply))
        .route("/item/:item_id", get(list_for_item))
        .route("/item/:item_id/summary", get(summary_for_item))
}

async fn create_supply(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<NewSupply>,
) -> Response {
    if let Err(e) = authz::require(&principal, "supply.write") {
        return errors::forbidden(e);
    }
    match services.supply.create(body) {
        Ok(supply) => (StatusCode::CREATED, Json(supply)).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn get_supply(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "supply.read") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<SupplyId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.supply.get(id) {
        Ok(supply) => Json(supply).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn update_supply(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<SupplyUpdate>,
) -> Response {
    if let Err(e) = authz::require(&principal, "supply.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<SupplyId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.supply.update(id, body) {
        Ok(supply) => Json(supply).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn delete_supply(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "supply.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<SupplyId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.supply.delete(id) {
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
    if let Err(e) = authz::require(&principal, "supply.read") {
        return errors::forbidden(e);
    }
    let item_id = match item_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    Json(services.supply.for_item(item_id, scope.location_id)).into_response()
}

async fn summary_for_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(item_id): Path<String>,
    Query(scope): Query<ScopeQuery>,
) -> Response {
    if let Err(e) = authz::require(&principal, "supply.read") {
        return errors::forbidden(e);
    }
    let item_id = match item_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.supply.summary(item_id, scope.location_id) {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => errors::domain_error(e),
    }
}
