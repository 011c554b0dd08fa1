//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::lookup::Lookup;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    LookupReader, ProductListQuery, ProductReader, ProductSearchQuery, ProductWriter,
};

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
        fn count_products(&self) -> RepositoryResult<usize>;
        fn search_products(
            &self,
            query: ProductSearchQuery,
        ) -> RepositoryResult<(usize, Vec<Product>)>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            id: ProductId,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
    }

    impl LookupReader for Repository {
        fn list_brands(&self) -> RepositoryResult<Vec<Lookup>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Lookup>>;
        fn list_units(&self) -> RepositoryResult<Vec<Lookup>>;
    }
}
