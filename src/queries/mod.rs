//! Query modules for the AmiiboAPI client.
//!
//! Each module provides a query struct that borrows an
//! [`AmiiboClient`](crate::AmiiboClient) and exposes async methods returning
//! `Result<T>` with typed payloads.

pub mod amiibo;
pub mod catalog;

pub use amiibo::{id_endpoint, AmiiboFilter, AmiiboQuery};
pub use catalog::{CatalogQuery, Category};
