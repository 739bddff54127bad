use axum::{extract::{State, Path, Query}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateOfferRequest, OfferDetailSpec, OfferListParams, UpdateOfferRequest};
use crate::api::dtos::responses::{OfferListItem, OfferView, OfferWriteView, Paginated, UserDetails};
use crate::domain::models::offer::{NewOfferDetailParams, Offer, OfferDetail, OfferOrdering, OfferQuery, OfferType};
use crate::domain::services::permissions::{is_business, is_owner};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use sqlx::types::Json as SqlJson;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

pub async fn list_offers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OfferListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let query = OfferQuery {
        creator_id: params.creator_id.clone(),
        search: params.search.clone(),
        ordering: params.ordering.as_deref().map(OfferOrdering::parse).unwrap_or_default(),
        page,
        page_size,
    };

    let (count, offers) = state.offer_repo.list(&query).await?;

    let mut results = Vec::with_capacity(offers.len());
    for offer in &offers {
        let details = state.offer_repo.list_details(&offer.id).await?;
        let owner = state.user_repo.find_by_id(&offer.user_id).await?;
        let owner_profile = state.profile_repo.find_by_user_id(&offer.user_id).await?;

        let user_details = match (&owner, &owner_profile) {
            (Some(user), Some(profile)) => UserDetails {
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                username: user.username.clone(),
            },
            _ => UserDetails {
                first_name: String::new(),
                last_name: String::new(),
                username: String::new(),
            },
        };

        results.push(OfferListItem::build(offer, &details, user_details));
    }

    let extra = [
        ("creator_id", params.creator_id.as_deref()),
        ("search", params.search.as_deref()),
        ("ordering", params.ordering.as_deref()),
    ];

    Ok(Json(Paginated::build("/api/offers/", &extra, page, page_size, count, results)))
}

pub async fn create_offer(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateOfferRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !is_business(&user) {
        return Err(AppError::Forbidden("Only business users can create offers".into()));
    }

    if payload.details.is_empty() {
        return Err(AppError::Validation("An offer requires at least one detail".into()));
    }

    let offer = Offer::new(
        user.id.clone(),
        payload.title,
        payload.description.unwrap_or_default(),
        payload.image,
    );

    let details = payload.details
        .into_iter()
        .map(|spec| build_detail(&offer.id, spec))
        .collect::<Result<Vec<_>, _>>()?;

    let created = state.offer_repo.create_with_details(&offer, &details).await?;

    info!("Offer created: {} by user {}", created.id, user.id);
    Ok((StatusCode::CREATED, Json(OfferWriteView::build(&created, details))))
}

pub async fn get_offer(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(offer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let offer = state.offer_repo.find_by_id(&offer_id).await?
        .ok_or(AppError::NotFound("Offer not found".into()))?;
    let details = state.offer_repo.list_details(&offer.id).await?;

    Ok(Json(OfferView::build(&offer, &details)))
}

pub async fn update_offer(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(offer_id): Path<String>,
    Json(payload): Json<UpdateOfferRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut offer = state.offer_repo.find_by_id(&offer_id).await?
        .ok_or(AppError::NotFound("Offer not found".into()))?;

    if !is_owner(&user, &offer.user_id) {
        return Err(AppError::Forbidden("You may only edit your own offers".into()));
    }

    if let Some(title) = payload.title { offer.title = title; }
    if let Some(description) = payload.description { offer.description = description; }
    if let Some(image) = payload.image {
        offer.image = if image.is_empty() { None } else { Some(image) };
    }
    offer.updated_at = Utc::now();

    // Tier entries are matched by id and updated in place; entries without
    // an id are ignored, foreign ids are rejected, untouched tiers stay.
    let mut changed_details = Vec::new();
    for spec in payload.details.unwrap_or_default() {
        let Some(detail_id) = spec.id else { continue };

        let mut detail = state.offer_repo.find_detail_of_offer(&offer.id, &detail_id).await?
            .ok_or(AppError::NotFound("Offer detail not found for this offer".into()))?;

        if let Some(title) = spec.title { detail.title = title; }
        if let Some(revisions) = spec.revisions { detail.revisions = revisions; }
        if let Some(days) = spec.delivery_time_in_days {
            if days < 1 {
                return Err(AppError::Validation("delivery_time_in_days must be positive".into()));
            }
            detail.delivery_time_in_days = days;
        }
        if let Some(price) = spec.price {
            if price < 0.0 {
                return Err(AppError::Validation("price must not be negative".into()));
            }
            detail.price = price;
        }
        if let Some(features) = spec.features { detail.features = SqlJson(features); }
        if let Some(offer_type) = spec.offer_type {
            detail.offer_type = parse_offer_type(&offer_type)?;
        }

        changed_details.push(detail);
    }

    let updated = state.offer_repo.update_with_details(&offer, &changed_details).await?;
    let details = state.offer_repo.list_details(&updated.id).await?;

    info!("Offer updated: {}", updated.id);
    Ok(Json(OfferWriteView::build(&updated, details)))
}

pub async fn delete_offer(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(offer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let offer = state.offer_repo.find_by_id(&offer_id).await?
        .ok_or(AppError::NotFound("Offer not found".into()))?;

    if !is_owner(&user, &offer.user_id) {
        return Err(AppError::Forbidden("You may only delete your own offers".into()));
    }

    state.offer_repo.delete(&offer.id).await?;

    info!("Offer deleted: {}", offer_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_offer_detail(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(detail_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = state.offer_repo.find_detail(&detail_id).await?
        .ok_or(AppError::NotFound("Offer detail not found".into()))?;
    Ok(Json(detail))
}

fn build_detail(offer_id: &str, spec: OfferDetailSpec) -> Result<OfferDetail, AppError> {
    if spec.delivery_time_in_days < 1 {
        return Err(AppError::Validation("delivery_time_in_days must be positive".into()));
    }
    if spec.price < 0.0 {
        return Err(AppError::Validation("price must not be negative".into()));
    }

    Ok(OfferDetail::new(offer_id.to_string(), NewOfferDetailParams {
        title: spec.title,
        revisions: spec.revisions.unwrap_or(0),
        delivery_time_in_days: spec.delivery_time_in_days,
        price: spec.price,
        features: spec.features.unwrap_or_default(),
        offer_type: parse_offer_type(&spec.offer_type)?,
    }))
}

fn parse_offer_type(value: &str) -> Result<OfferType, AppError> {
    match value {
        "basic" => Ok(OfferType::Basic),
        "standard" => Ok(OfferType::Standard),
        "premium" => Ok(OfferType::Premium),
        _ => Err(AppError::Validation("offer_type must be basic, standard or premium".into())),
    }
}
