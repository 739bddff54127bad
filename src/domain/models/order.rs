use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::domain::models::offer::{OfferDetail, OfferType};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum OrderStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in_progress" => Some(OrderStatus::InProgress),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Order {
    pub id: String,
    pub customer_user: String,
    pub business_user: String,
    pub offer_detail_id: String,
    pub title: String,
    pub revisions: i64,
    pub delivery_time_in_days: i64,
    pub price: f64,
    pub features: Json<Vec<String>>,
    pub offer_type: OfferType,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Copies the tier at this instant. Later edits to the tier must not
    /// show up in the order, and no value may violate the snapshot CHECKs:
    /// negative numerics are clamped to zero.
    pub fn from_offer_detail(customer_user: String, business_user: String, offer_title: String, detail: &OfferDetail) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            customer_user,
            business_user,
            offer_detail_id: detail.id.clone(),
            title: offer_title,
            revisions: detail.revisions.max(0),
            delivery_time_in_days: detail.delivery_time_in_days.max(0),
            price: detail.price.max(0.0),
            features: detail.features.clone(),
            offer_type: detail.offer_type,
            status: OrderStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::offer::NewOfferDetailParams;

    fn detail(revisions: i64, days: i64, price: f64) -> OfferDetail {
        OfferDetail::new("offer-1".to_string(), NewOfferDetailParams {
            title: "Basic".to_string(),
            revisions,
            delivery_time_in_days: days,
            price,
            features: vec!["Logo".to_string()],
            offer_type: OfferType::Basic,
        })
    }

    #[test]
    fn snapshot_copies_tier_values() {
        let d = detail(2, 5, 100.0);
        let order = Order::from_offer_detail("cust".into(), "biz".into(), "Logo Design".into(), &d);

        assert_eq!(order.title, "Logo Design");
        assert_eq!(order.revisions, 2);
        assert_eq!(order.delivery_time_in_days, 5);
        assert_eq!(order.price, 100.0);
        assert_eq!(order.offer_detail_id, d.id);
        assert_eq!(order.status, OrderStatus::InProgress);
    }

    #[test]
    fn snapshot_clamps_negative_numerics() {
        let d = detail(-1, -3, -50.0);
        let order = Order::from_offer_detail("cust".into(), "biz".into(), "T".into(), &d);

        assert_eq!(order.revisions, 0);
        assert_eq!(order.delivery_time_in_days, 0);
        assert_eq!(order.price, 0.0);
    }

    #[test]
    fn status_parse_rejects_unknown_values() {
        assert_eq!(OrderStatus::parse("completed"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse("done"), None);
    }
}
