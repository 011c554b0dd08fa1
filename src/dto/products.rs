//! DTOs shaped for the product templates, exports and JSON replies.

use serde::{Deserialize, Serialize};

use crate::domain::lookup::Lookup;
use crate::domain::product::Product;
use crate::models::config::CatalogSettings;
use crate::pagination::{PageMetadata, PageRequest};
use crate::services::ServiceError;

/// Raw query parameters of the product listing. Every field is kept as text
/// so malformed values degrade to defaults instead of rejecting the request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProductsQuery {
    pub page: Option<String>,
    pub search: Option<String>,
    pub filter: Option<String>,
}

/// Every value sent for each listing key, in request order.
#[derive(Debug, Default, Deserialize)]
struct RepeatedParams {
    #[serde(default)]
    page: Vec<String>,
    #[serde(default)]
    search: Vec<String>,
    #[serde(default)]
    filter: Vec<String>,
}

impl ProductsQuery {
    /// Reads the listing parameters from a raw query string. Never fails:
    /// the first occurrence of a repeated key wins and unknown keys are
    /// ignored.
    pub fn from_query_string(raw: &str) -> Self {
        let params: RepeatedParams = serde_html_form::from_str(raw).unwrap_or_default();
        let first = |values: Vec<String>| values.into_iter().next();

        Self {
            page: first(params.page),
            search: first(params.search),
            filter: first(params.filter),
        }
    }

    pub fn into_page_request(self, settings: &CatalogSettings) -> PageRequest {
        PageRequest::normalize(self.page.as_deref(), self.search, self.filter, settings)
    }
}

/// Data required to render the product listing template.
#[derive(Debug, Serialize)]
pub struct ProductsPageData {
    pub products: Vec<Product>,
    pub pagination: PageMetadata,
    /// Search term echoed back into the search form.
    pub search: String,
    pub filter: String,
    pub error: Option<String>,
}

impl ProductsPageData {
    /// Empty first page shown when the listing could not be retrieved.
    pub fn failed(request: &PageRequest, err: &ServiceError) -> Self {
        Self {
            products: Vec::new(),
            pagination: PageMetadata::empty(request.page_size),
            search: request.search_term.clone(),
            filter: request.filter_type.clone(),
            error: Some(format!("Failed to retrieve products: {err}")),
        }
    }
}

/// Choices offered by the new and edit forms, plus the product being edited.
#[derive(Debug, Serialize)]
pub struct ProductFormData {
    pub product: Option<Product>,
    pub brands: Vec<Lookup>,
    pub categories: Vec<Lookup>,
    pub units: Vec<Lookup>,
}

/// JSON body returned by the mutating endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// One line of the CSV export.
#[derive(Debug, Serialize)]
pub struct ProductCsvRow<'a> {
    pub id: i32,
    pub name: &'a str,
    pub price: String,
    pub stock: i32,
    pub unit: &'a str,
    pub brand: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a Product> for ProductCsvRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.as_str(),
            price: format!("{:.2}", product.price),
            stock: product.stock,
            unit: product.unit.as_deref().unwrap_or_default(),
            brand: product.brand.as_deref().unwrap_or_default(),
            category: product.category.as_deref().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_keeps_first_occurrence_of_repeated_keys() {
        let query = ProductsQuery::from_query_string("page=1&page=2&search=a&search=b");
        assert_eq!(query.page.as_deref(), Some("1"));
        assert_eq!(query.search.as_deref(), Some("a"));
        assert_eq!(query.filter, None);
    }

    #[test]
    fn query_string_decodes_form_encoding() {
        let query = ProductsQuery::from_query_string("search=caf%C3%A9+%26+co&filter=name&x=1");
        assert_eq!(query.search.as_deref(), Some("café & co"));
        assert_eq!(query.filter.as_deref(), Some("name"));
    }

    #[test]
    fn empty_query_string_yields_defaults() {
        let request =
            ProductsQuery::from_query_string("").into_page_request(&CatalogSettings::default());
        assert_eq!(request.page, 1);
        assert_eq!(request.search_term, "");
        assert_eq!(request.filter_type, "all");
    }
}
