//! Repository implementation for catalog products.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::product::{NewProduct, Product, SearchFilter, UpdateProduct};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, Pagination, ProductListQuery, ProductReader, ProductSearchQuery,
    ProductWriter,
};

fn to_sql_bound(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Escapes LIKE wildcards so the search term is matched literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Converts rows into domain products, resolving brand, category and unit
/// names with one query per lookup table.
fn into_products(
    conn: &mut SqliteConnection,
    rows: Vec<DbProduct>,
) -> RepositoryResult<Vec<Product>> {
    use crate::schema::{brands, categories, units};

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let brand_ids: Vec<i32> = rows.iter().map(|row| row.brand_id).collect();
    let category_ids: Vec<i32> = rows.iter().map(|row| row.category_id).collect();
    let unit_ids: Vec<i32> = rows.iter().map(|row| row.unit_id).collect();

    let brand_names: HashMap<i32, String> = brands::table
        .filter(brands::id.eq_any(brand_ids))
        .select((brands::id, brands::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();
    let category_names: HashMap<i32, String> = categories::table
        .filter(categories::id.eq_any(category_ids))
        .select((categories::id, categories::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();
    let unit_names: HashMap<i32, String> = units::table
        .filter(units::id.eq_any(unit_ids))
        .select((units::id, units::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();

    rows.into_iter()
        .map(|row| {
            let brand = brand_names.get(&row.brand_id).cloned();
            let category = category_names.get(&row.category_id).cloned();
            let unit = unit_names.get(&row.unit_id).cloned();

            let mut product = Product::try_from(row).map_err(RepositoryError::from)?;
            product.brand = brand;
            product.category = category;
            product.unit = unit;
            Ok(product)
        })
        .collect()
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let row = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(into_products(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table
            .order(products::id.asc())
            .into_boxed::<Sqlite>();

        if let Some(Pagination { limit, offset }) = query.pagination {
            items = items.limit(to_sql_bound(limit)).offset(to_sql_bound(offset));
        }

        let rows = items.load::<DbProduct>(&mut conn)?;
        into_products(&mut conn, rows)
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let total = products::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }

    fn search_products(
        &self,
        query: ProductSearchQuery,
    ) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::products;

        let exact_id = match query.filter {
            SearchFilter::Id => match query.term.trim().parse::<i32>() {
                Ok(id) => Some(id),
                // A non-numeric term cannot match any id.
                Err(_) => return Ok((0, Vec::new())),
            },
            SearchFilter::Name | SearchFilter::All => None,
        };
        let pattern = like_pattern(&query.term);

        let mut conn = self.conn()?;

        let query_builder = || {
            let items = products::table.into_boxed::<Sqlite>();
            match (query.filter, exact_id) {
                (SearchFilter::Id, Some(id)) => items.filter(products::id.eq(id)),
                (SearchFilter::Name, _) => {
                    items.filter(products::name.like(pattern.clone()).escape('\\'))
                }
                _ => items,
            }
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(products::id.asc());
        if let Some(Pagination { limit, offset }) = query.pagination {
            items = items.limit(to_sql_bound(limit)).offset(to_sql_bound(offset));
        }

        let rows = items.load::<DbProduct>(&mut conn)?;
        Ok((total, into_products(&mut conn, rows)?))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let insertable: DbNewProduct = new_product.into();

        let row = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        into_products(&mut conn, vec![row])?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changeset: DbUpdateProduct = updates.into();

        let row = diesel::update(products::table.find(id.get()))
            .set(&changeset)
            .get_result::<DbProduct>(&mut conn)?;

        into_products(&mut conn, vec![row])?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(products::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rice"), "%rice%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn sql_bounds_saturate() {
        assert_eq!(to_sql_bound(10), 10);
        assert_eq!(to_sql_bound(usize::MAX), i64::MAX);
    }
}
