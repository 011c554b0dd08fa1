//! Shared helpers for integration tests.

#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;
use vendor_products::db::{DbPool, establish_connection_pool};
use vendor_products::domain::product::NewProduct;
use vendor_products::domain::types::{BrandId, CategoryId, ProductName, ProductStatus, UnitId};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Migrated SQLite database living in a temporary directory for the
/// lifetime of the value.
pub struct TestDb {
    pool: DbPool,
    // Dropped after the pool.
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let test_db = Self::unmigrated(name);
        let mut conn = test_db.pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        drop(conn);
        test_db
    }

    /// Empty database without any tables.
    pub fn unmigrated(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// A product in the seeded brand, category and unit.
pub fn sample_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid name"),
        price,
        stock: 5,
        status: ProductStatus::Active,
        brand_id: BrandId::new(1).expect("valid id"),
        category_id: CategoryId::new(1).expect("valid id"),
        unit_id: UnitId::new(1).expect("valid id"),
    }
}
