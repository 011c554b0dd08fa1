use serde::Serialize;

use crate::domain::types::{
    BrandId, CategoryId, ProductId, ProductName, ProductStatus, UnitId,
};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: f64,
    pub stock: i32,
    pub status: ProductStatus,
    pub brand_id: BrandId,
    pub category_id: CategoryId,
    pub unit_id: UnitId,
    /// Display names resolved from the lookup tables.
    pub brand: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
}

/// Values required to register a product.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: f64,
    pub stock: i32,
    pub status: ProductStatus,
    pub brand_id: BrandId,
    pub category_id: CategoryId,
    pub unit_id: UnitId,
}

/// Full replacement of the editable product columns.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateProduct {
    pub name: ProductName,
    pub price: f64,
    pub stock: i32,
    pub status: ProductStatus,
    pub brand_id: BrandId,
    pub category_id: CategoryId,
    pub unit_id: UnitId,
}

/// Which column a catalog search matches against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SearchFilter {
    /// Exact match on the product id.
    Id,
    /// Substring match on the product name.
    Name,
    /// No filtering: the full listing.
    All,
}

impl SearchFilter {
    /// Maps the filter names used by the listing form. Unknown names yield
    /// `None` and are left for the caller to resolve.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(SearchFilter::Id),
            "name" => Some(SearchFilter::Name),
            "all" => Some(SearchFilter::All),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SearchFilter::Id => "id",
            SearchFilter::Name => "name",
            SearchFilter::All => "all",
        }
    }
}
