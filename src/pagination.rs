//! Listing parameters and page metadata for the product catalog.
//!
//! [`PageRequest::normalize`] turns raw query-string values into a request
//! that is always valid, and [`PageMetadata::new`] derives what the listing
//! template needs to draw page links that keep the active search.

use serde::Serialize;

use crate::domain::product::SearchFilter;
use crate::models::config::CatalogSettings;

/// Builds the page-link window. `None` marks a gap rendered as an ellipsis.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Number of pages needed for `total_count` rows; zero rows means zero pages.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// Normalized pagination, search and filter parameters for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub search_term: String,
    /// Raw filter name; interpreted by the resolver.
    pub filter_type: String,
}

impl PageRequest {
    /// Applies defaults to raw request values. Never fails: a missing,
    /// non-numeric or non-positive page becomes `1`, a missing search term
    /// becomes empty and a missing filter becomes the configured default.
    pub fn normalize(
        page: Option<&str>,
        search_term: Option<String>,
        filter_type: Option<String>,
        settings: &CatalogSettings,
    ) -> Self {
        let page = page
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        Self {
            page,
            page_size: settings.page_size.max(1),
            search_term: search_term.unwrap_or_default(),
            filter_type: filter_type.unwrap_or_else(|| settings.default_filter.clone()),
        }
    }

    /// Rows to skip before the requested page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Whether a search term or a filter other than `all` is active.
    pub fn has_active_filter(&self) -> bool {
        !self.search_term.is_empty() || self.filter_type != SearchFilter::All.as_str()
    }
}

/// Rows for the current page plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Display-oriented pagination summary consumed by the listing template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageMetadata {
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    /// `search=..&filter=..` fragment appended to page links; empty when no
    /// search or filter is active.
    pub query_string: String,
    pub pages: Vec<Option<usize>>,
}

impl PageMetadata {
    pub fn new(
        request: &PageRequest,
        total_count: usize,
    ) -> Result<Self, serde_html_form::ser::Error> {
        let total_pages = total_pages(total_count, request.page_size);
        let query_string = if request.has_active_filter() {
            encode_query_string(&request.search_term, &request.filter_type)?
        } else {
            String::new()
        };

        Ok(Self {
            page: request.page,
            page_size: request.page_size,
            total_count,
            total_pages,
            query_string,
            pages: get_pages(total_pages, request.page, 2, 2, 4, 2),
        })
    }

    /// Metadata shown next to an error: first page, nothing found, no links.
    pub fn empty(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            total_count: 0,
            total_pages: 0,
            query_string: String::new(),
            pages: Vec::new(),
        }
    }
}

/// Form-encodes the search term and filter so page links carry them along.
pub fn encode_query_string(
    search_term: &str,
    filter_type: &str,
) -> Result<String, serde_html_form::ser::Error> {
    serde_html_form::to_string(&[("search", search_term), ("filter", filter_type)])
}
