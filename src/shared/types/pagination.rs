//! Page-based pagination
//!
//! [`Page::compute`] turns a page request, a total record count and the
//! already-sliced records of the current page into the response body served
//! by list endpoints, including `previous` / `next` navigation links derived
//! from the URL of the current request.
//!
//! Wire contract:
//! - the page-size query parameter and JSON field are both named `limit`;
//! - links that do not apply are omitted from the JSON body, never `null`.

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

/// Query parameter carrying the 1-based page index.
pub const PAGE_PARAM: &str = "page";
/// Query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "limit";

/// A validated page request. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Number of records preceding the first record of this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// One page of records plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Number of pages needed to hold every record
    pub total_pages: u64,
    /// Number of records across all pages
    pub total_records: u64,
    /// Records of the current page, in the order the caller supplied
    pub records: Vec<T>,
    /// URL of the previous page, when that page holds records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// URL of the next page, when records remain after this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Build a page response.
    ///
    /// `base_url` is the absolute URL of the current request; it may carry
    /// `page`, `limit`, both or neither. `records` is passed through
    /// unchanged and is not checked against `request.limit`.
    ///
    /// `request.limit` must be non-zero; callers validate it upstream.
    pub fn compute(base_url: &Url, request: PageRequest, total_records: u64, records: Vec<T>) -> Self {
        debug_assert!(request.limit > 0, "page size must be validated upstream");

        Self {
            page: request.page,
            limit: request.limit,
            total_pages: total_pages(total_records, request.limit),
            total_records,
            records,
            previous: previous_link(base_url, request, total_records),
            next: next_link(base_url, request, total_records),
        }
    }

    /// Convert the records while keeping the navigation metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            total_records: self.total_records,
            records: self.records.into_iter().map(f).collect(),
            previous: self.previous,
            next: self.next,
        }
    }
}

/// `ceil(total_records / limit)`; zero when there are no records.
pub fn total_pages(total_records: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_records.div_ceil(u64::from(limit))
}

/// Link to `page - 1`.
///
/// Omitted on the first page, and when the previous page would be empty
/// under the current total (a stale link followed after records were
/// deleted).
pub fn previous_link(base_url: &Url, request: PageRequest, total_records: u64) -> Option<String> {
    if request.page <= 1 {
        return None;
    }
    let before_current = u64::from(request.page - 1) * u64::from(request.limit);
    if total_records <= before_current {
        return None;
    }
    Some(link_to_page(base_url, request.page - 1, request.limit))
}

/// Link to `page + 1`, omitted once the current page reaches the total.
///
/// Unlike [`previous_link`] this only looks at how far the current page
/// reaches; the two checks are intentionally asymmetric.
pub fn next_link(base_url: &Url, request: PageRequest, total_records: u64) -> Option<String> {
    let reached = u64::from(request.page) * u64::from(request.limit);
    if reached >= total_records {
        return None;
    }
    // No page after u32::MAX to point at
    let target = request.page.checked_add(1)?;
    Some(link_to_page(base_url, target, request.limit))
}

/// Rewrite the query of `base_url` so that it addresses `target`.
///
/// - an existing `page` pair (first occurrence) gets the new value;
/// - otherwise `page` is appended, followed by `limit` when the URL does
///   not carry one yet.
///
/// Every other `&`-separated segment is copied as-is, so encodings and
/// valueless flags survive. Keys are compared exactly, so `pageSize` or
/// `homepage` never match.
fn link_to_page(base_url: &Url, target: u32, limit: u32) -> String {
    let mut segments: Vec<String> = base_url
        .query()
        .filter(|q| !q.is_empty())
        .map(|q| q.split('&').map(String::from).collect())
        .unwrap_or_default();

    let page_pair = format!("{PAGE_PARAM}={target}");
    match segments.iter_mut().find(|s| query_key(s) == PAGE_PARAM) {
        Some(segment) => *segment = page_pair,
        None => {
            let has_limit = segments.iter().any(|s| query_key(s) == LIMIT_PARAM);
            segments.push(page_pair);
            if !has_limit {
                segments.push(format!("{LIMIT_PARAM}={limit}"));
            }
        }
    }

    let mut url = base_url.clone();
    url.set_query(Some(&segments.join("&")));
    url.into()
}

/// Raw key of a `key=value` (or bare `key`) query segment.
fn query_key(segment: &str) -> &str {
    segment.split_once('=').map_or(segment, |(key, _)| key)
}

// ── Tests ──────────────────────────────────────────────────────
