//! Request/response DTOs.
//!
//! Create/update bodies deserialize straight into the domain `New*`/`*Update`
//! types; this module holds only the shapes that have no domain counterpart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockgrid_auth::Role;
use stockgrid_core::{LocationId, PageRequest, UserId};

/// Paged-listing query string (`?page=&size=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl ListQuery {
    pub fn page_request(&self) -> PageRequest {
        let default = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(default.page),
            self.size.unwrap_or(default.size),
        )
    }
}

/// Optional location scope (`?location_id=`) on supply/demand item routes.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    pub location_id: Option<LocationId>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredResponse {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WhoamiResponse {
    pub user_id: UserId,
    pub roles: Vec<Role>,
}
