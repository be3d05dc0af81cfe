//! Lead query service: filtered, sorted, paginated listing and lookup.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::lead::Lead;
use crate::models::pagination::{Paged, Pagination};

/// Filters for listing leads. Status and source are kept as raw strings so
/// that an unknown value matches nothing (equality filter semantics) rather
/// than failing deserialization.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LeadFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl LeadFilters {
    /// Resolve the requested sort key against the known attribute set.
    /// Anything outside it falls back to `created_at`; the returned name is
    /// a static column identifier, never caller input.
    fn sort_column(&self) -> &'static str {
        match self.sort_by.as_deref() {
            Some("name") => "name",
            Some("email") => "email",
            Some("phone") => "phone",
            Some("status") => "status",
            Some("source") => "source",
            Some("assignedTo") => "assigned_to",
            Some("updatedAt") => "updated_at",
            _ => "created_at",
        }
    }

    fn sort_direction(&self) -> &'static str {
        match self.order.as_deref() {
            Some("asc") => "ASC",
            _ => "DESC",
        }
    }
}

/// Treat an absent or empty query value as "no filter".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// List leads with filters, sorting, and pagination.
///
/// The search string matches case-insensitively against name, email, and
/// phone with OR semantics. A page past the end of the result set returns
/// an empty data array.
pub async fn list(
    pool: &PgPool,
    filters: &LeadFilters,
    pagination: &Pagination,
) -> Result<Paged<Lead>, AppError> {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_index = 0u32;

    let search_pattern = non_empty(&filters.search).map(|s| format!("%{s}%"));
    let status = non_empty(&filters.status);
    let source = non_empty(&filters.source);

    if search_pattern.is_some() {
        param_index += 1;
        conditions.push(format!(
            "(name ILIKE ${param_index} OR email ILIKE ${param_index} OR phone ILIKE ${param_index})"
        ));
    }
    if status.is_some() {
        param_index += 1;
        conditions.push(format!("status::text = ${param_index}"));
    }
    if source.is_some() {
        param_index += 1;
        conditions.push(format!("source = ${param_index}"));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let count_sql = format!("SELECT COUNT(*) FROM leads {where_clause}");
    let data_sql = format!(
        "SELECT id, name, email, phone, status, source, assigned_to, created_at, updated_at \
         FROM leads {where_clause} \
         ORDER BY {} {} \
         LIMIT {} OFFSET {}",
        filters.sort_column(),
        filters.sort_direction(),
        pagination.limit(),
        pagination.offset()
    );

    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    let mut data_query = sqlx::query_as::<_, Lead>(&data_sql);

    macro_rules! bind_both {
        ($val:expr) => {
            count_query = count_query.bind($val);
            data_query = data_query.bind($val);
        };
    }

    if let Some(ref pattern) = search_pattern {
        bind_both!(pattern);
    }
    if let Some(status) = status {
        bind_both!(status);
    }
    if let Some(source) = source {
        bind_both!(source);
    }

    let total = count_query.fetch_one(pool).await?;
    let data = data_query.fetch_all(pool).await?;

    Ok(Paged::new(data, total, pagination))
}

/// Find a lead by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Lead, AppError> {
    sqlx::query_as::<_, Lead>(
        "SELECT id, name, email, phone, status, source, assigned_to, created_at, updated_at \
         FROM leads WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_field_falls_back_to_created_at() {
        let filters = LeadFilters {
            sort_by: Some("createdAt; DROP TABLE leads".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.sort_column(), "created_at");
    }

    #[test]
    fn known_sort_fields_map_to_columns() {
        let filters = LeadFilters {
            sort_by: Some("assignedTo".to_string()),
            ..Default::default()
        };
        assert_eq!(filters.sort_column(), "assigned_to");

        let filters = LeadFilters::default();
        assert_eq!(filters.sort_column(), "created_at");
    }

    #[test]
    fn order_defaults_to_descending() {
        assert_eq!(LeadFilters::default().sort_direction(), "DESC");

        let asc = LeadFilters {
            order: Some("asc".to_string()),
            ..Default::default()
        };
        assert_eq!(asc.sort_direction(), "ASC");

        let junk = LeadFilters {
            order: Some("sideways".to_string()),
            ..Default::default()
        };
        assert_eq!(junk.sort_direction(), "DESC");
    }

    #[test]
    fn empty_search_means_no_filter() {
        assert_eq!(non_empty(&Some("".to_string())), None);
        assert_eq!(non_empty(&Some("   ".to_string())), None);
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some("ada".to_string())), Some("ada"));
    }

    #[test]
    fn filters_deserialize_from_query_names() {
        let filters: LeadFilters =
            serde_json::from_str(r#"{"search":"ada","sortBy":"name","order":"asc"}"#).unwrap();
        assert_eq!(filters.search.as_deref(), Some("ada"));
        assert_eq!(filters.sort_column(), "name");
        assert_eq!(filters.sort_direction(), "ASC");
    }
}
