use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OfferType {
    Basic,
    Standard,
    Premium,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Offer {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(user_id: String, title: String, description: String, image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            title,
            description,
            image,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One priced package option (basic/standard/premium) within an offer.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct OfferDetail {
    pub id: String,
    pub offer_id: String,
    pub title: String,
    pub revisions: i64,
    pub delivery_time_in_days: i64,
    pub price: f64,
    pub features: Json<Vec<String>>,
    pub offer_type: OfferType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferOrdering {
    #[default]
    UpdatedAtDesc,
    UpdatedAtAsc,
    MinPriceAsc,
    MinPriceDesc,
}

impl OfferOrdering {
    /// Query-param form: `updated_at` / `min_price`, `-` prefix for
    /// descending. Anything else falls back to the default ordering.
    pub fn parse(value: &str) -> Self {
        match value {
            "updated_at" => OfferOrdering::UpdatedAtAsc,
            "-updated_at" => OfferOrdering::UpdatedAtDesc,
            "min_price" => OfferOrdering::MinPriceAsc,
            "-min_price" => OfferOrdering::MinPriceDesc,
            _ => OfferOrdering::default(),
        }
    }
}

/// Filter/sort/pagination arguments for the public offer listing.
#[derive(Debug, Clone, Default)]
pub struct OfferQuery {
    pub creator_id: Option<String>,
    pub search: Option<String>,
    pub ordering: OfferOrdering,
    pub page: i64,
    pub page_size: i64,
}

pub struct NewOfferDetailParams {
    pub title: String,
    pub revisions: i64,
    pub delivery_time_in_days: i64,
    pub price: f64,
    pub features: Vec<String>,
    pub offer_type: OfferType,
}

/// Cheapest tier price, absent for a tier-less offer.
pub fn min_price(details: &[OfferDetail]) -> Option<f64> {
    details.iter().map(|d| d.price).reduce(f64::min)
}

/// Fastest tier delivery in days, absent for a tier-less offer.
pub fn min_delivery_time(details: &[OfferDetail]) -> Option<i64> {
    details.iter().map(|d| d.delivery_time_in_days).min()
}

impl OfferDetail {
    pub fn new(offer_id: String, params: NewOfferDetailParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            offer_id,
            title: params.title,
            revisions: params.revisions,
            delivery_time_in_days: params.delivery_time_in_days,
            price: params.price,
            features: Json(params.features),
            offer_type: params.offer_type,
        }
    }
}
