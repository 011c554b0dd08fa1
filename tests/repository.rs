use vendor_products::domain::product::{SearchFilter, UpdateProduct};
use vendor_products::domain::types::{ProductId, ProductName, ProductStatus};
use vendor_products::repository::errors::RepositoryError;
use vendor_products::repository::{
    DieselRepository, LookupReader, ProductListQuery, ProductReader, ProductSearchQuery,
    ProductWriter,
};

mod common;

use common::sample_product;

fn seeded_repo(name: &str, products: &[&str]) -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new(name);
    let repo = DieselRepository::new(test_db.pool());
    for (i, product) in products.iter().enumerate() {
        repo.create_product(&sample_product(product, i as f64 + 1.0))
            .unwrap();
    }
    (test_db, repo)
}

#[test]
fn test_product_repository_crud() {
    let (_db, repo) = seeded_repo("test_product_repository_crud.db", &[]);

    let created = repo.create_product(&sample_product("Rice", 4.5)).unwrap();
    assert_eq!(created.name.as_str(), "Rice");
    assert_eq!(created.status, ProductStatus::Active);
    assert_eq!(created.brand.as_deref(), Some("Generic"));
    assert_eq!(created.category.as_deref(), Some("General"));
    assert_eq!(created.unit.as_deref(), Some("Unit"));

    let fetched = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let updates = UpdateProduct {
        name: ProductName::new("Brown rice").unwrap(),
        price: 5.25,
        stock: 12,
        status: ProductStatus::Disabled,
        brand_id: created.brand_id,
        category_id: created.category_id,
        unit_id: created.unit_id,
    };
    let updated = repo.update_product(created.id, &updates).unwrap();
    assert_eq!(updated.name.as_str(), "Brown rice");
    assert_eq!(updated.price, 5.25);
    assert_eq!(updated.stock, 12);
    assert_eq!(updated.status, ProductStatus::Disabled);

    repo.delete_product(created.id).unwrap();
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_product(created.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_update_missing_product_is_not_found() {
    let (_db, repo) = seeded_repo("test_update_missing_product.db", &[]);
    let product = sample_product("Rice", 1.0);
    let updates = UpdateProduct {
        name: product.name,
        price: product.price,
        stock: product.stock,
        status: product.status,
        brand_id: product.brand_id,
        category_id: product.category_id,
        unit_id: product.unit_id,
    };

    let result = repo.update_product(ProductId::new(42).unwrap(), &updates);
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn test_unknown_brand_is_a_constraint_violation() {
    let (_db, repo) = seeded_repo("test_unknown_brand.db", &[]);
    let mut product = sample_product("Rice", 1.0);
    product.brand_id = vendor_products::domain::types::BrandId::new(99).unwrap();

    let result = repo.create_product(&product);
    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[test]
fn test_list_and_count_paginate_by_id() {
    let names: Vec<String> = (1..=25).map(|i| format!("Product {i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let (_db, repo) = seeded_repo("test_list_and_count.db", &names);

    assert_eq!(repo.count_products().unwrap(), 25);

    let page = repo
        .list_products(ProductListQuery::new().paginate(10, 10))
        .unwrap();
    let ids: Vec<i32> = page.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<_>>());

    let last = repo
        .list_products(ProductListQuery::new().paginate(10, 20))
        .unwrap();
    assert_eq!(last.len(), 5);

    let beyond = repo
        .list_products(ProductListQuery::new().paginate(10, 30))
        .unwrap();
    assert!(beyond.is_empty());

    let all = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(all.len(), 25);
}

#[test]
fn test_search_by_id_matches_exactly() {
    let (_db, repo) = seeded_repo("test_search_by_id.db", &["Rice", "Beans", "Rice flour"]);

    let (total, items) = repo
        .search_products(ProductSearchQuery::new("2", SearchFilter::Id).paginate(10, 0))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "Beans");

    let (total, items) = repo
        .search_products(ProductSearchQuery::new("rice", SearchFilter::Id).paginate(10, 0))
        .unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[test]
fn test_search_by_name_matches_substrings() {
    let (_db, repo) = seeded_repo(
        "test_search_by_name.db",
        &["Rice", "Beans", "Rice flour", "50% cocoa", "500g cocoa"],
    );

    let (total, items) = repo
        .search_products(ProductSearchQuery::new("Rice", SearchFilter::Name).paginate(1, 0))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name.as_str(), "Rice");

    let (total, items) = repo
        .search_products(ProductSearchQuery::new("50%", SearchFilter::Name).paginate(10, 0))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "50% cocoa");
}

#[test]
fn test_search_all_returns_full_listing() {
    let (_db, repo) = seeded_repo("test_search_all.db", &["Rice", "Beans", "Lentils"]);

    let (total, items) = repo
        .search_products(ProductSearchQuery::new("zzz", SearchFilter::All).paginate(2, 0))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 2);
}

#[test]
fn test_lookups_are_seeded() {
    let (_db, repo) = seeded_repo("test_lookups_are_seeded.db", &[]);

    let brands = repo.list_brands().unwrap();
    let categories = repo.list_categories().unwrap();
    let units = repo.list_units().unwrap();

    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].name, "Generic");
    assert_eq!(categories[0].name, "General");
    assert_eq!(units[0].name, "Unit");
}
