//! Full-catalog exports.

use log::error;

use crate::domain::product::Product;
use crate::dto::products::ProductCsvRow;
use crate::repository::{ProductListQuery, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads every product, unpaginated, for the printable listing.
pub fn load_all_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products(ProductListQuery::new()).map_err(|err| {
        error!("Failed to load products for export: {err}");
        ServiceError::from(err)
    })
}

/// Renders the whole catalog as CSV with a header row.
pub fn export_csv<R>(repo: &R) -> ServiceResult<Vec<u8>>
where
    R: ProductReader + ?Sized,
{
    let products = load_all_products(repo)?;
    write_csv(&products)
}

const CSV_HEADER: [&str; 7] = ["id", "name", "price", "stock", "unit", "brand", "category"];

fn write_csv(products: &[Product]) -> ServiceResult<Vec<u8>> {
    // The header is written by hand so an empty catalog still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|err| ServiceError::Internal(format!("Failed to write CSV header: {err}")))?;

    for product in products {
        writer
            .serialize(ProductCsvRow::from(product))
            .map_err(|err| ServiceError::Internal(format!("Failed to write CSV row: {err}")))?;
    }

    writer
        .into_inner()
        .map_err(|err| ServiceError::Internal(format!("Failed to flush CSV: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        BrandId, CategoryId, ProductId, ProductName, ProductStatus, UnitId,
    };
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn product(id: i32, name: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            price,
            stock: 5,
            status: ProductStatus::Active,
            brand_id: BrandId::new(1).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            unit_id: UnitId::new(1).unwrap(),
            brand: Some("Generic".to_string()),
            category: Some("General".to_string()),
            unit: None,
        }
    }

    #[test]
    fn csv_has_header_and_quoted_rows() {
        let mut repo = MockRepository::new();
        repo.expect_list_products()
            .withf(|query| query.pagination.is_none())
            .times(1)
            .returning(|_| Ok(vec![product(1, "Rice", 4.5), product(2, "Beans, red", 2.0)]));

        let csv = String::from_utf8(export_csv(&repo).unwrap()).unwrap();

        assert_eq!(
            csv,
            "id,name,price,stock,unit,brand,category\n\
             1,Rice,4.50,5,,Generic,General\n\
             2,\"Beans, red\",2.00,5,,Generic,General\n"
        );
    }

    #[test]
    fn empty_catalog_still_has_header() {
        let csv = String::from_utf8(write_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "id,name,price,stock,unit,brand,category\n");
    }

    #[test]
    fn csv_export_surfaces_repository_failures() {
        let mut repo = MockRepository::new();
        repo.expect_list_products()
            .returning(|_| Err(RepositoryError::ConnectionError("refused".to_string())));

        assert!(matches!(export_csv(&repo), Err(ServiceError::Repository(_))));
    }
}
