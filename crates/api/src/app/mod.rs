//! Application assembly: router construction and layering.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use stockgrid_auth::Hs256Jwt;

use crate::config::AppConfig;
use crate::middleware::{auth_middleware, AuthState};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full application router.
///
/// Public routes (health, register, login) are merged with the protected
/// router, which requires a valid bearer token for every request.
pub fn build_app(config: AppConfig) -> Router {
    let jwt = Arc::new(Hs256Jwt::new(config.jwt_secret.as_bytes()));
    let auth_state = AuthState { jwt: jwt.clone() };
    let services = Arc::new(AppServices::new(jwt, config.token_ttl));

    let public = Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::users::public_router())
        .layer(Extension(services.clone()));

    let protected = routes::protected_router()
        .layer(axum::middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(Extension(services));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors_layer(config.allowed_origins.as_deref()))
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
