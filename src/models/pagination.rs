//! Pagination primitives shared by list endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Pagination query parameters. Malformed numeric input (e.g. `page=abc`)
/// normalizes to the default instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}

impl Pagination {
    /// Maximum items per page.
    const MAX_LIMIT: i64 = 100;

    /// Default items per page.
    const DEFAULT_LIMIT: i64 = 10;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.current_page() - 1) * self.limit()
    }

    pub fn current_page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Accept a query value as an optional integer, treating anything that
/// does not parse (empty string, garbage) as absent.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Pagination metadata returned alongside every page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Paged response envelope: `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T: Serialize> Paged<T> {
    pub fn new(data: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        let limit = pagination.limit();
        let total_pages = (total + limit - 1) / limit;
        Self {
            data,
            pagination: PageMeta {
                page: pagination.current_page(),
                limit,
                total,
                total_pages,
            },
        }
    }
}
