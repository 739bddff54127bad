use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::domain::models::offer::{min_delivery_time, min_price, Offer, OfferDetail};
use crate::domain::models::order::{Order, OrderStatus};
use crate::domain::models::profile::ProfileWithUser;
use crate::domain::models::user::Role;
use sqlx::types::Json;

#[derive(Serialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "type")]
    pub role: Role,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub file: String,
    pub location: String,
    pub tel: String,
    pub description: String,
    pub working_hours: String,
    #[serde(rename = "type")]
    pub role: Role,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl ProfileResponse {
    pub fn from_profile(p: &ProfileWithUser) -> Self {
        Self {
            user: p.user_id.clone(),
            username: p.username.clone(),
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            file: p.file.clone().unwrap_or_default(),
            location: p.location.clone(),
            tel: p.tel.clone(),
            description: p.description.clone(),
            working_hours: p.working_hours.clone(),
            role: p.role,
            email: p.email.clone(),
            created_at: p.created_at,
        }
    }
}

/// Tier reference in offer read views: id plus retrieval URL, never the
/// full tier body.
#[derive(Serialize)]
pub struct OfferDetailLink {
    pub id: String,
    pub url: String,
}

impl OfferDetailLink {
    pub fn from_detail(detail: &OfferDetail) -> Self {
        Self {
            id: detail.id.clone(),
            url: format!("/api/offerdetails/{}/", detail.id),
        }
    }
}

#[derive(Serialize)]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// List view entry: link-style tiers, aggregates, embedded owner details.
#[derive(Serialize)]
pub struct OfferListItem {
    pub id: String,
    pub user: String,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: Vec<OfferDetailLink>,
    pub min_price: Option<f64>,
    pub min_delivery_time: Option<i64>,
    pub user_details: UserDetails,
}

impl OfferListItem {
    pub fn build(offer: &Offer, details: &[OfferDetail], user_details: UserDetails) -> Self {
        Self {
            id: offer.id.clone(),
            user: offer.user_id.clone(),
            title: offer.title.clone(),
            image: offer.image.clone(),
            description: offer.description.clone(),
            created_at: offer.created_at,
            updated_at: offer.updated_at,
            details: details.iter().map(OfferDetailLink::from_detail).collect(),
            min_price: min_price(details),
            min_delivery_time: min_delivery_time(details),
            user_details,
        }
    }
}

/// Single-offer view: same projection as the list entry minus the owner
/// details block.
#[derive(Serialize)]
pub struct OfferView {
    pub id: String,
    pub user: String,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: Vec<OfferDetailLink>,
    pub min_price: Option<f64>,
    pub min_delivery_time: Option<i64>,
}

impl OfferView {
    pub fn build(offer: &Offer, details: &[OfferDetail]) -> Self {
        Self {
            id: offer.id.clone(),
            user: offer.user_id.clone(),
            title: offer.title.clone(),
            image: offer.image.clone(),
            description: offer.description.clone(),
            created_at: offer.created_at,
            updated_at: offer.updated_at,
            details: details.iter().map(OfferDetailLink::from_detail).collect(),
            min_price: min_price(details),
            min_delivery_time: min_delivery_time(details),
        }
    }
}

/// Write-path echo (POST/PATCH): full tier bodies.
#[derive(Serialize)]
pub struct OfferWriteView {
    pub id: String,
    pub user: String,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub details: Vec<OfferDetail>,
}

impl OfferWriteView {
    pub fn build(offer: &Offer, details: Vec<OfferDetail>) -> Self {
        Self {
            id: offer.id.clone(),
            user: offer.user_id.clone(),
            title: offer.title.clone(),
            image: offer.image.clone(),
            description: offer.description.clone(),
            created_at: offer.created_at,
            updated_at: offer.updated_at,
            details,
        }
    }
}

/// Order body. The internal tier reference stays private.
#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer_user: String,
    pub business_user: String,
    pub title: String,
    pub revisions: i64,
    pub delivery_time_in_days: i64,
    pub price: f64,
    pub features: Json<Vec<String>>,
    pub offer_type: crate::domain::models::offer::OfferType,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderResponse {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer_user: order.customer_user.clone(),
            business_user: order.business_user.clone(),
            title: order.title.clone(),
            revisions: order.revisions,
            delivery_time_in_days: order.delivery_time_in_days,
            price: order.price,
            features: order.features.clone(),
            offer_type: order.offer_type,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct Paginated<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// `extra` carries the non-pagination query params so page links keep
    /// the caller's filters.
    pub fn build(
        path: &str,
        extra: &[(&str, Option<&str>)],
        page: i64,
        page_size: i64,
        count: i64,
        results: Vec<T>,
    ) -> Self {
        let total_pages = if count == 0 { 0 } else { (count + page_size - 1) / page_size };

        let link = |target_page: i64| {
            let mut url = format!("{}?page={}&page_size={}", path, target_page, page_size);
            for (key, value) in extra {
                if let Some(value) = value {
                    url.push_str(&format!("&{}={}", key, value));
                }
            }
            url
        };

        Self {
            count,
            next: (page < total_pages).then(|| link(page + 1)),
            previous: (page > 1).then(|| link(page - 1)),
            results,
        }
    }
}

#[derive(Serialize)]
pub struct BaseInfoResponse {
    pub review_count: i64,
    pub average_rating: f64,
    pub business_profile_count: i64,
    pub offer_count: i64,
}

#[derive(Serialize)]
pub struct OrderCountResponse {
    pub order_count: i64,
}

#[derive(Serialize)]
pub struct CompletedOrderCountResponse {
    pub completed_order_count: i64,
}
