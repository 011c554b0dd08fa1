//! Product listing, search and maintenance workflows.

use log::{debug, error, warn};

use crate::domain::product::{Product, SearchFilter};
use crate::domain::types::ProductId;
use crate::dto::products::{ProductFormData, ProductsPageData};
use crate::forms::products::{ProductForm, ProductPayload};
use crate::pagination::{PageMetadata, PageRequest, PageResult};
use crate::repository::{
    LookupReader, ProductListQuery, ProductReader, ProductSearchQuery, ProductWriter,
};
use crate::services::{ServiceError, ServiceResult};

/// Resolves a [`PageRequest`] into one page of products and its metadata.
///
/// A non-empty search term goes through a single search call that returns
/// both the page and the number of matches. Without a search term the page
/// and the total are fetched by two separate calls; a write landing between
/// them can make the total disagree with the rows.
pub struct CatalogResolver<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R> CatalogResolver<'a, R>
where
    R: ProductReader + ?Sized,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn resolve(&self, request: &PageRequest) -> ServiceResult<PageResult<Product>> {
        let limit = request.page_size;
        let offset = request.offset();

        if !request.search_term.is_empty() {
            let filter = self.search_filter(&request.filter_type);
            debug!(
                "Searching products by {} (limit {limit}, offset {offset})",
                filter.as_str()
            );

            let query = ProductSearchQuery::new(request.search_term.as_str(), filter)
                .paginate(limit, offset);
            let (total, items) = self.repo.search_products(query)?;
            return Ok(PageResult::new(items, total));
        }

        debug!("Listing products (limit {limit}, offset {offset})");
        let items = self
            .repo
            .list_products(ProductListQuery::new().paginate(limit, offset))?;
        let total = self.repo.count_products()?;

        Ok(PageResult::new(items, total))
    }

    pub fn metadata(
        &self,
        request: &PageRequest,
        result: &PageResult<Product>,
    ) -> ServiceResult<PageMetadata> {
        PageMetadata::new(request, result.total_count)
            .map_err(|err| ServiceError::Internal(format!("Failed to encode page links: {err}")))
    }

    /// Unknown filter names search the full listing rather than failing.
    fn search_filter(&self, raw: &str) -> SearchFilter {
        SearchFilter::parse(raw).unwrap_or_else(|| {
            warn!("Unknown product filter '{raw}', falling back to the full listing");
            SearchFilter::All
        })
    }
}

/// Loads one page of the product listing.
pub fn load_index_page<R>(
    repo: &R,
    request: &PageRequest,
) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + ?Sized,
{
    let resolver = CatalogResolver::new(repo);

    let result = resolver.resolve(request).map_err(|err| {
        error!("Failed to list products: {err}");
        err
    })?;
    let pagination = resolver.metadata(request, &result)?;

    Ok(ProductsPageData {
        products: result.items,
        pagination,
        search: request.search_term.clone(),
        filter: request.filter_type.clone(),
        error: None,
    })
}

fn load_lookups<R>(repo: &R, product: Option<Product>) -> ServiceResult<ProductFormData>
where
    R: LookupReader + ?Sized,
{
    Ok(ProductFormData {
        product,
        brands: repo.list_brands()?,
        categories: repo.list_categories()?,
        units: repo.list_units()?,
    })
}

fn product_id(raw: i32) -> ServiceResult<ProductId> {
    ProductId::new(raw).map_err(|_| ServiceError::NotFound)
}

/// Loads the choices shown by the new product form.
pub fn load_new_product_form<R>(repo: &R) -> ServiceResult<ProductFormData>
where
    R: LookupReader + ?Sized,
{
    load_lookups(repo, None).map_err(|err| {
        error!("Failed to load the new product form: {err}");
        err
    })
}

/// Validates the form and stores a new product.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = ProductPayload::try_from(form)?.into_new_product();

    repo.create_product(&new_product).map_err(|err| {
        error!("Failed to create product: {err}");
        ServiceError::from(err)
    })
}

/// Loads a product together with the form choices.
pub fn load_edit_product_form<R>(repo: &R, raw_id: i32) -> ServiceResult<ProductFormData>
where
    R: ProductReader + LookupReader + ?Sized,
{
    let id = product_id(raw_id)?;

    let product = repo
        .get_product_by_id(id)
        .map_err(|err| {
            error!("Failed to load product {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    load_lookups(repo, Some(product))
}

/// Validates the form and replaces the product's editable columns.
pub fn update_product<R>(repo: &R, raw_id: i32, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let id = product_id(raw_id)?;
    let updates = ProductPayload::try_from(form)?.into_update_product();

    debug!("Updating product {id}: {updates:?}");

    repo.update_product(id, &updates).map_err(|err| {
        error!("Failed to update product {id}: {err}");
        ServiceError::from(err)
    })
}

/// Deletes a product after checking it exists.
pub fn delete_product<R>(repo: &R, raw_id: i32) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let id = product_id(raw_id)?;

    if repo.get_product_by_id(id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_product(id).map_err(|err| {
        error!("Failed to delete product {id}: {err}");
        ServiceError::from(err)
    })
}
