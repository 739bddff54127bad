use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::BaseInfoResponse;
use crate::domain::models::user::Role;
use crate::error::AppError;
use std::sync::Arc;

pub async fn base_info(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let (review_count, average) = state.review_repo.count_and_average().await?;

    // one decimal place, 0.0 when nothing has been rated yet
    let average_rating = average.map(|avg| (avg * 10.0).round() / 10.0).unwrap_or(0.0);

    let business_profile_count = state.profile_repo.count_by_role(Role::Business).await?;
    let offer_count = state.offer_repo.count().await?;

    Ok(Json(BaseInfoResponse {
        review_count,
        average_rating,
        business_profile_count,
        offer_count,
    }))
}
