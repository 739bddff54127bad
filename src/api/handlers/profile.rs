use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::UpdateProfileRequest;
use crate::api::dtos::responses::ProfileResponse;
use crate::domain::models::user::Role;
use crate::domain::services::permissions::is_owner;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.profile_repo.find_by_user_id(&user_id).await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;

    Ok(Json(ProfileResponse::from_profile(&profile)))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state.profile_repo.find_by_user_id(&user_id).await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;

    if !is_owner(&user, &existing.user_id) {
        return Err(AppError::Forbidden("You may only edit your own profile".into()));
    }

    let mut profile = existing.to_profile();
    if let Some(first_name) = payload.first_name { profile.first_name = first_name; }
    if let Some(last_name) = payload.last_name { profile.last_name = last_name; }
    if let Some(location) = payload.location { profile.location = location; }
    if let Some(tel) = payload.tel { profile.tel = tel; }
    if let Some(description) = payload.description { profile.description = description; }
    if let Some(working_hours) = payload.working_hours { profile.working_hours = working_hours; }
    if let Some(file) = payload.file {
        profile.file = if file.is_empty() { None } else { Some(file) };
    }

    state.profile_repo.update(&profile).await?;

    let refreshed = state.profile_repo.find_by_user_id(&user_id).await?
        .ok_or(AppError::Internal)?;

    info!("Profile updated: {}", user_id);
    Ok(Json(ProfileResponse::from_profile(&refreshed)))
}

pub async fn list_business_profiles(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    list_by_role(state, Role::Business).await
}

pub async fn list_customer_profiles(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    list_by_role(state, Role::Customer).await
}

async fn list_by_role(state: Arc<AppState>, role: Role) -> Result<Json<Vec<ProfileResponse>>, AppError> {
    let profiles = state.profile_repo.list_by_role(role).await?;
    Ok(Json(profiles.iter().map(ProfileResponse::from_profile).collect()))
}
