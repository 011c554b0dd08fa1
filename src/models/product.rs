use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::types::{
    BrandId, CategoryId, ProductId, ProductName, TypeConstraintError, UnitId,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub status: String,
    pub brand_id: i32,
    pub category_id: i32,
    pub unit_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub price: f64,
    pub stock: i32,
    pub status: &'a str,
    pub brand_id: i32,
    pub category_id: i32,
    pub unit_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
/// Data used when updating a [`Product`] record.
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub price: f64,
    pub stock: i32,
    pub status: &'a str,
    pub brand_id: i32,
    pub category_id: i32,
    pub unit_id: i32,
}

/// Lookup names are left empty; the repository resolves them separately.
impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: ProductName::new(product.name)?,
            price: product.price,
            stock: product.stock,
            status: product.status.parse()?,
            brand_id: BrandId::new(product.brand_id)?,
            category_id: CategoryId::new(product.category_id)?,
            unit_id: UnitId::new(product.unit_id)?,
            brand: None,
            category: None,
            unit: None,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            name: product.name.as_str(),
            price: product.price,
            stock: product.stock,
            status: product.status.code(),
            brand_id: product.brand_id.get(),
            category_id: product.category_id.get(),
            unit_id: product.unit_id.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(product: &'a DomainUpdateProduct) -> Self {
        Self {
            name: product.name.as_str(),
            price: product.price,
            stock: product.stock,
            status: product.status.code(),
            brand_id: product.brand_id.get(),
            category_id: product.category_id.get(),
            unit_id: product.unit_id.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ProductStatus;

    fn sample_row() -> Product {
        Product {
            id: 3,
            name: "Rice".to_string(),
            price: 4.5,
            stock: 12,
            status: "I".to_string(),
            brand_id: 1,
            category_id: 2,
            unit_id: 3,
        }
    }

    #[test]
    fn row_into_domain() {
        let domain = DomainProduct::try_from(sample_row()).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name.as_str(), "Rice");
        assert_eq!(domain.status, ProductStatus::Inactive);
        assert_eq!(domain.unit_id.get(), 3);
        assert!(domain.brand.is_none());
    }

    #[test]
    fn row_with_unknown_status_is_rejected() {
        let mut row = sample_row();
        row.status = "Q".to_string();
        assert_eq!(
            DomainProduct::try_from(row),
            Err(TypeConstraintError::UnknownStatus("Q".to_string()))
        );
    }

    #[test]
    fn domain_update_into_changeset() {
        let update = DomainUpdateProduct {
            name: ProductName::new("Beans").unwrap(),
            price: 2.25,
            stock: 40,
            status: ProductStatus::Disabled,
            brand_id: BrandId::new(1).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            unit_id: UnitId::new(2).unwrap(),
        };
        let changeset: UpdateProduct = (&update).into();
        assert_eq!(changeset.name, "Beans");
        assert_eq!(changeset.status, "X");
        assert_eq!(changeset.unit_id, 2);
    }
}
