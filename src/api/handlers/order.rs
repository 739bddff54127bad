use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::api::dtos::responses::{CompletedOrderCountResponse, OrderCountResponse, OrderResponse};
use crate::domain::models::order::{Order, OrderStatus};
use crate::domain::services::permissions::{is_business, is_customer, is_staff};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !is_customer(&user) {
        return Err(AppError::Forbidden("Only customers can place orders".into()));
    }

    let detail = state.offer_repo.find_detail(&payload.offer_detail_id).await?
        .ok_or(AppError::NotFound("OfferDetail not found.".into()))?;

    let offer = state.offer_repo.find_by_id(&detail.offer_id).await?
        .ok_or(AppError::Internal)?;

    let order = Order::from_offer_detail(user.id.clone(), offer.user_id, offer.title, &detail);
    let created = state.order_repo.create(&order).await?;

    info!("Order created: {} (tier {}) by customer {}", created.id, detail.id, user.id);
    Ok((StatusCode::CREATED, Json(OrderResponse::from_order(&created))))
}

pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let orders = state.order_repo.list_for_user(&user.id).await?;
    let results: Vec<_> = orders.iter().map(OrderResponse::from_order).collect();
    Ok(Json(results))
}

pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(order_id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !is_business(&user) {
        return Err(AppError::Forbidden("Not allowed.".into()));
    }

    let order = state.order_repo.find_by_id(&order_id).await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    if order.business_user != user.id {
        return Err(AppError::Forbidden("Not allowed.".into()));
    }

    let status = OrderStatus::parse(&payload.status)
        .ok_or_else(|| AppError::Validation("Invalid status.".into()))?;

    let updated = state.order_repo.update_status(&order.id, status).await?;

    info!("Order {} status set to {}", updated.id, payload.status);
    Ok(Json(OrderResponse::from_order(&updated)))
}

pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_staff(&user) {
        return Err(AppError::Forbidden("Not allowed.".into()));
    }

    state.order_repo.delete(&order_id).await?;

    info!("Order deleted by staff: {}", order_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn order_count(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(business_user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.user_repo.exists(&business_user_id).await? {
        return Err(AppError::NotFound("Business user not found.".into()));
    }

    let order_count = state.order_repo
        .count_by_business_and_status(&business_user_id, OrderStatus::InProgress)
        .await?;

    Ok(Json(OrderCountResponse { order_count }))
}

pub async fn completed_order_count(
    State(state): State<Arc<AppState>>,
    AuthUser(_user): AuthUser,
    Path(business_user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.user_repo.exists(&business_user_id).await? {
        return Err(AppError::NotFound("Business user not found.".into()));
    }

    let completed_order_count = state.order_repo
        .count_by_business_and_status(&business_user_id, OrderStatus::Completed)
        .await?;

    Ok(Json(CompletedOrderCountResponse { completed_order_count }))
}
