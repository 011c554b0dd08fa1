//! Create and edit forms for products.
//!
//! Numeric fields arrive as raw strings so that a malformed number can be
//! reported as a form error instead of failing request extraction.

use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{
    BrandId, CategoryId, ProductName, ProductStatus, UnitId,
};
use crate::forms::FormError;

#[derive(Debug, Default, Deserialize, Validate)]
/// Fields submitted by both the new and the edit product forms.
pub struct ProductForm {
    #[validate(length(min = 1, max = 255))]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub brand_id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub unit_id: String,
    /// `A` on the new form; a checkbox on the edit form.
    pub status: Option<String>,
}

/// Parsed and validated values of a [`ProductForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: ProductName,
    pub price: f64,
    pub stock: i32,
    pub brand_id: BrandId,
    pub category_id: CategoryId,
    pub unit_id: UnitId,
    status: Option<String>,
}

fn parse_int(raw: &str) -> Result<i32, FormError> {
    raw.trim().parse::<i32>().map_err(|_| FormError::InvalidNumber)
}

impl TryFrom<ProductForm> for ProductPayload {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let price = form
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or(FormError::InvalidNumber)?;
        let stock = parse_int(&form.stock)?;
        let brand_id = parse_int(&form.brand_id)?;
        let category_id = parse_int(&form.category_id)?;
        let unit_id = parse_int(&form.unit_id)?;

        Ok(Self {
            name: ProductName::new(form.name).map_err(|_| FormError::InvalidName)?,
            price,
            stock,
            brand_id: BrandId::new(brand_id).map_err(|_| FormError::InvalidReference)?,
            category_id: CategoryId::new(category_id)
                .map_err(|_| FormError::InvalidReference)?,
            unit_id: UnitId::new(unit_id).map_err(|_| FormError::InvalidReference)?,
            status: form.status,
        })
    }
}

impl ProductPayload {
    /// New products are active only when the form sends `A`.
    pub fn into_new_product(self) -> NewProduct {
        let status = if self.status.as_deref() == Some(ProductStatus::Active.code()) {
            ProductStatus::Active
        } else {
            ProductStatus::Inactive
        };

        NewProduct {
            name: self.name,
            price: self.price,
            stock: self.stock,
            status,
            brand_id: self.brand_id,
            category_id: self.category_id,
            unit_id: self.unit_id,
        }
    }

    /// Any submitted status value keeps an edited product active; an
    /// unchecked box disables it.
    pub fn into_update_product(self) -> UpdateProduct {
        let status = match self.status.as_deref() {
            Some(value) if !value.is_empty() => ProductStatus::Active,
            _ => ProductStatus::Disabled,
        };

        UpdateProduct {
            name: self.name,
            price: self.price,
            stock: self.stock,
            status,
            brand_id: self.brand_id,
            category_id: self.category_id,
            unit_id: self.unit_id,
        }
    }
}
