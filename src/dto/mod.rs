//! DTO modules that bridge services with templates and JSON responses.

pub mod products;
