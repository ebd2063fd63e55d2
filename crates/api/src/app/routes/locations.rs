use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use stockgrid_core::LocationId;
use stockgrid_inventory::{LocationUpdate, NewLocation};

use crate::app::dto::ListQuery;
use crate::app::{errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_location).get(list_locations))
        .route(
            "/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
}

async fn create_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<NewLocation>,
) -> Response {
    if let Err(e) = authz::require(&principal, "locations.write") {
        return errors::forbidden(e);
    }
    match services.locations.create(body) {
        Ok(location) => (StatusCode::CREATED, Json(location)).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn list_locations(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<ListQuery>,
) -> Response {
    if let Err(e) = authz::require(&principal, "locations.read") {
        return errors::forbidden(e);
    }
    Json(services.locations.list(query.page_request())).into_response()
}

async fn get_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "locations.read") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<LocationId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.locations.get(id) {
        Ok(location) => Json(location).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn update_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<LocationUpdate>,
) -> Response {
    if let Err(e) = authz::require(&principal, "locations.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<LocationId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.locations.update(id, body) {
        Ok(location) => Json(location).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn delete_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "locations.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<LocationId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.locations.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error(e),
    }
}
