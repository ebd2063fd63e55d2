use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use stockgrid_core::ItemId;
use stockgrid_inventory::{ItemUpdate, NewItem};

use crate::app::dto::ListQuery;
use crate::app::{errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<NewItem>,
) -> Response {
    if let Err(e) = authz::require(&principal, "items.write") {
        return errors::forbidden(e);
    }
    match services.items.create(body) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<ListQuery>,
) -> Response {
    if let Err(e) = authz::require(&principal, "items.read") {
        return errors::forbidden(e);
    }
    Json(services.items.list(query.page_request())).into_response()
}

async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "items.read") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.items.get(id) {
        Ok(item) => Json(item).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<ItemUpdate>,
) -> Response {
    if let Err(e) = authz::require(&principal, "items.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.items.update(id, body) {
        Ok(item) => Json(item).into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Response {
    if let Err(e) = authz::require(&principal, "items.write") {
        return errors::forbidden(e);
    }
    let id = match id.parse::<ItemId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error(e),
    };
    match services.items.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error(e),
    }
}
