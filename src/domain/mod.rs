//! Domain aggregates exposed by the product catalog service layer.

pub mod lookup;
pub mod product;
pub mod types;
