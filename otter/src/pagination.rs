use axum::http::header::{HeaderMap, HeaderValue};

use crate::models::ListOptions;

/// Parse a React Admin range such as `[0,9]`. Anything unparseable falls back
/// to the first page of `default_per_page` rows.
#[must_use]
pub fn parse_range(range: Option<&str>, default_per_page: u64) -> (u64, u64) {
    let fallback = (0, default_per_page.max(1) - 1);
    range.map_or(fallback, |r| {
        serde_json::from_str::<[u64; 2]>(r)
            .map(|range| (range[0], range[1].max(range[0])))
            .unwrap_or(fallback)
    })
}

/// Resolve `(offset, limit)` from list options.
///
/// `page`/`per_page` take precedence over `range`. `page` is 1-based and a
/// page size of zero is treated as one.
#[must_use]
pub fn parse_pagination(options: &ListOptions, default_per_page: u64) -> (u64, u64) {
    if options.page.is_some() || options.per_page.is_some() {
        // Standard REST pagination (1-based page numbers)
        let page = options.page.unwrap_or(1);
        let per_page = options.per_page.unwrap_or(default_per_page).max(1);
        (page.saturating_sub(1).saturating_mul(per_page), per_page)
    } else if let Some(range) = &options.range {
        // React Admin pagination
        let (start, end) = parse_range(Some(range), default_per_page);
        (start, end.saturating_sub(start).saturating_add(1))
    } else {
        (0, default_per_page.max(1))
    }
}

/// Build the `Content-Range` header for one page of a listing:
/// `<resource> <first>-<last>/<total>`.
///
/// The resource name is reduced to header-safe characters; an empty page
/// reports `<offset>-<offset>`.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    limit: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let last = offset
        .saturating_add(limit)
        .saturating_sub(1)
        .min(total_count.saturating_sub(1))
        .max(offset);

    let resource_name: String = resource_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect();
    let content_range = format!("{resource_name} {offset}-{last}/{total_count}");

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&content_range) {
        headers.insert("Content-Range", value);
    }
    headers
}
