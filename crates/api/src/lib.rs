//! `stockgrid-api` — HTTP surface (axum) over the inventory services.

pub mod app;
pub mod authz;
pub mod config;
pub mod context;
pub mod middleware;
