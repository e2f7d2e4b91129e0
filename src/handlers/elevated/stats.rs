use axum::{extract::State, Json};

use crate::database::Store;
use crate::error::ApiError;
use crate::services::stats::{compute_stats, AdminStats};

/// GET /admin-stat - revenue totals, collection counts and the per-booking
/// sales chart. Admin only.
pub async fn admin_stat_get(State(store): State<Store>) -> Result<Json<AdminStats>, ApiError> {
    let stats = compute_stats(&store).await?;
    Ok(Json(stats))
}
