use axum::{extract::{State, Path, Query}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateReviewRequest, ReviewListParams, UpdateReviewRequest};
use crate::domain::models::review::{Review, ReviewOrdering, ReviewQuery};
use crate::domain::services::permissions::{is_customer, is_owner};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn validate_rating(rating: i64) -> Result<(), AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation("rating must be between 1 and 5".into()));
    }
    Ok(())
}

pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Query(params): Query<ReviewListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = ReviewQuery {
        business_user_id: params.business_user_id,
        reviewer_id: params.reviewer_id,
        ordering: params.ordering.as_deref().map(ReviewOrdering::parse).unwrap_or_default(),
    };

    let reviews = state.review_repo.list(&query).await?;
    Ok(Json(reviews))
}

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !is_customer(&user) {
        return Err(AppError::Forbidden("Only customers can write reviews".into()));
    }

    validate_rating(payload.rating)?;

    if payload.business_user == user.id {
        return Err(AppError::Validation("You cannot review yourself.".into()));
    }

    if !state.user_repo.exists(&payload.business_user).await? {
        return Err(AppError::Validation("Business user not found.".into()));
    }

    // Pre-check only; the UNIQUE(business_user, reviewer) constraint is the
    // real guard and a racing insert comes back as a 400 via the error
    // boundary.
    if state.review_repo.exists_for_pair(&user.id, &payload.business_user).await? {
        return Err(AppError::Validation("You already submitted a review for this business user.".into()));
    }

    let review = Review::new(
        payload.business_user,
        user.id.clone(),
        payload.rating,
        payload.description.unwrap_or_default(),
    );
    let created = state.review_repo.create(&review).await?;

    info!("Review created: {} ({}/5) by {}", created.id, created.rating, user.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_review(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review = state.review_repo.find_by_id(&review_id).await?
        .ok_or(AppError::NotFound("Review not found".into()))?;
    Ok(Json(review))
}

pub async fn update_review(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(review_id): Path<String>,
    Json(payload): Json<UpdateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut review = state.review_repo.find_by_id(&review_id).await?
        .ok_or(AppError::NotFound("Review not found".into()))?;

    if !is_owner(&user, &review.reviewer) {
        return Err(AppError::Forbidden("You may only edit your own reviews".into()));
    }

    if let Some(rating) = payload.rating {
        validate_rating(rating)?;
        review.rating = rating;
    }
    if let Some(description) = payload.description {
        review.description = description;
    }

    let updated = state.review_repo.update(&review).await?;

    info!("Review updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(review_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let review = state.review_repo.find_by_id(&review_id).await?
        .ok_or(AppError::NotFound("Review not found".into()))?;

    if !is_owner(&user, &review.reviewer) {
        return Err(AppError::Forbidden("You may only delete your own reviews".into()));
    }

    state.review_repo.delete(&review.id).await?;

    info!("Review deleted: {}", review_id);
    Ok(StatusCode::NO_CONTENT)
}
