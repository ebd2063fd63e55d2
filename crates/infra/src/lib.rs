//! `stockgrid-infra` — repositories and application services.
//!
//! The repository layer is a document-store style keyed CRUD abstraction with
//! an in-memory implementation; the service layer applies the business rules
//! (validation, referential integrity, availability math) on top of it.

pub mod repository;
pub mod services;


pub use repository::{InMemoryStore, KeyedStore};
