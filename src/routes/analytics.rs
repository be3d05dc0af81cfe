//! Analytics route: aggregated statistics for the dashboard overview.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::services::analytics::{self, AnalyticsSummary};
use crate::AppState;

/// GET /api/analytics — snapshot analytics summary over all leads.
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let summary = analytics::summary(&state.db).await?;
    Ok(Json(summary))
}
