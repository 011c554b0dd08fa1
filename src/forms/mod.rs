//! Form definitions backing the product routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod products;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("price, stock, brand, category and unit must be valid numbers")]
    InvalidNumber,

    #[error("brand, category and unit must refer to existing entries")]
    InvalidReference,

    #[error("invalid name")]
    InvalidName,
}
