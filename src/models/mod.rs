//! Database models shared across the catalog repository.

pub mod config;
pub mod lookup;
pub mod product;
