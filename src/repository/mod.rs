//! Data-access boundary of the catalog.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`]
//! implements them on top of the SQLite pool and [`mock::MockRepository`]
//! replaces it in service tests.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::lookup::Lookup;
use crate::domain::product::{NewProduct, Product, SearchFilter, UpdateProduct};
use crate::domain::types::ProductId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod lookup;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod product;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Row window applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearchQuery {
    pub term: String,
    pub filter: SearchFilter,
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, limit: usize, offset: usize) -> Self {
        self.pagination = Some(Pagination { limit, offset });
        self
    }
}

impl ProductSearchQuery {
    pub fn new(term: impl Into<String>, filter: SearchFilter) -> Self {
        Self {
            term: term.into(),
            filter,
            pagination: None,
        }
    }

    pub fn paginate(mut self, limit: usize, offset: usize) -> Self {
        self.pagination = Some(Pagination { limit, offset });
        self
    }
}

pub trait ProductReader {
    /// `Ok(None)` when no product has the id.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Products ordered by id; the whole catalog when the query is not paginated.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    fn count_products(&self) -> RepositoryResult<usize>;
    /// Total number of matches together with the requested page of them.
    fn search_products(&self, query: ProductSearchQuery)
    -> RepositoryResult<(usize, Vec<Product>)>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product>;
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}

pub trait LookupReader {
    fn list_brands(&self) -> RepositoryResult<Vec<Lookup>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Lookup>>;
    fn list_units(&self) -> RepositoryResult<Vec<Lookup>>;
}
