use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};

use stockgrid_auth::NewUser;

use crate::app::dto::{LoginRequest, RegisteredResponse, TokenResponse, WhoamiResponse};
use crate::app::{errors, AppServices};
use crate::context::PrincipalContext;

pub fn public_router() -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewUser>,
) -> Response {
    match services.users.register(body) {
        Ok(user) => (
            StatusCode::CREATED,
            Json(RegisteredResponse {
                id: user.id,
                username: user.username,
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error(e),
    }
}

async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    let user = match services.users.authenticate(&body.username, &body.password) {
        Ok(user) => user,
        Err(e) => return errors::domain_error(e),
    };

    match services.issue_token(&user) {
        Ok((token, expires_at)) => Json(TokenResponse { token, expires_at }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "token issuance failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "failed to issue token",
            )
        }
    }
}

pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> Response {
    Json(WhoamiResponse {
        user_id: principal.user_id(),
        roles: principal.roles().to_vec(),
    })
    .into_response()
}
