use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, base_info, health, offer, order, profile, review};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/registration/", post(auth::register))
        .route("/api/login/", post(auth::login))
        .route("/api/auth/refresh/", post(auth::refresh))
        .route("/api/auth/logout/", post(auth::logout))

        // Profiles
        .route("/api/profile/{user_id}/", get(profile::get_profile).patch(profile::update_profile))
        .route("/api/profiles/business/", get(profile::list_business_profiles))
        .route("/api/profiles/customer/", get(profile::list_customer_profiles))

        // Offers (list is public, everything else authenticated)
        .route("/api/offers/", get(offer::list_offers).post(offer::create_offer))
        .route("/api/offers/{offer_id}/", get(offer::get_offer).patch(offer::update_offer).delete(offer::delete_offer))
        .route("/api/offerdetails/{detail_id}/", get(offer::get_offer_detail))

        // Orders
        .route("/api/orders/", get(order::list_orders).post(order::create_order))
        .route("/api/orders/{order_id}/", patch(order::update_order_status).delete(order::delete_order))
        .route("/api/order-count/{business_user_id}/", get(order::order_count))
        .route("/api/completed-order-count/{business_user_id}/", get(order::completed_order_count))

        // Reviews
        .route("/api/reviews/", get(review::list_reviews).post(review::create_review))
        .route("/api/reviews/{review_id}/", get(review::get_review).patch(review::update_review).delete(review::delete_review))

        // Public stats
        .route("/api/base-info/", get(base_info::base_info))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
