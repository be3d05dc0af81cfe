//! Lead routes: filtered list and single-record lookup.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::lead::Lead;
use crate::models::pagination::{Paged, Pagination};
use crate::services::lead::{self as lead_service, LeadFilters};
use crate::AppState;

/// GET /api/leads — list leads with search, filters, sorting, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
    Query(filters): Query<LeadFilters>,
) -> Result<Json<Paged<Lead>>, AppError> {
    let result = lead_service::list(&state.db, &filters, &pagination).await?;
    Ok(Json(result))
}

/// GET /api/leads/:id — get a lead by ID.
///
/// A syntactically invalid ID cannot name any lead, so it reports the same
/// not-found result as an absent one.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lead>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::NotFound("Lead not found".to_string()))?;
    let lead = lead_service::find_by_id(&state.db, id).await?;
    Ok(Json(lead))
}
