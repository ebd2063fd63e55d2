use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

use crate::app::{errors, AppServices};
use crate::authz;
use crate::context::PrincipalContext;

pub async fn summary(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Response {
    if let Err(e) = authz::require(&principal, "dashboard.read") {
        return errors::forbidden(e);
    }
    Json(services.dashboard.summary()).into_response()
}
