//! `stockgrid-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod page;

pub use error::{DomainError, DomainResult};
pub use id::{DemandId, ItemId, LocationId, SupplyId, ThresholdId, UserId};
pub use page::{Page, PageRequest};
