//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, sanitized
//! non-empty names, known status codes) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided status code is not one of the known codes.
    #[error("unknown product status: {0}")]
    UnknownStatus(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ProductId, "Unique identifier for a product.");
id_newtype!(BrandId, "Unique identifier for a brand.");
id_newtype!(CategoryId, "Unique identifier for a product category.");
id_newtype!(UnitId, "Unique identifier for a unit of measure.");

/// Sanitized, trimmed, non-empty product name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Strips markup, trims and rejects empty names.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        let trimmed = sanitized.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProductName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lifecycle state of a product, stored as a single-letter code.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ProductStatus {
    /// `A`: listed and sellable.
    #[default]
    Active,
    /// `I`: created without being activated.
    Inactive,
    /// `X`: switched off from the edit form.
    Disabled,
}

impl ProductStatus {
    /// Single-letter code persisted in the `status` column.
    pub const fn code(self) -> &'static str {
        match self {
            ProductStatus::Active => "A",
            ProductStatus::Inactive => "I",
            ProductStatus::Disabled => "X",
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, ProductStatus::Active)
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProductStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(ProductStatus::Active),
            "I" => Ok(ProductStatus::Inactive),
            "X" => Ok(ProductStatus::Disabled),
            other => Err(TypeConstraintError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(ProductId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(BrandId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ProductId::new(7).map(ProductId::get), Ok(7));
    }

    #[test]
    fn product_name_is_sanitized_and_trimmed() {
        let name = ProductName::new("  <script>alert(1)</script>Rice 5kg  ").unwrap();
        assert_eq!(name.as_str(), "Rice 5kg");
    }

    #[test]
    fn product_name_rejects_blank_values() {
        assert_eq!(
            ProductName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn status_codes_round_trip() {
        for status in [
            ProductStatus::Active,
            ProductStatus::Inactive,
            ProductStatus::Disabled,
        ] {
            assert_eq!(status.code().parse::<ProductStatus>(), Ok(status));
        }
        assert!("Z".parse::<ProductStatus>().is_err());
    }
}
