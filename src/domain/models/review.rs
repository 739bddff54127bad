use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewOrdering {
    /// Rating descending, updated_at descending as tiebreak.
    Rating,
    #[default]
    UpdatedAt,
}

impl ReviewOrdering {
    pub fn parse(value: &str) -> Self {
        match value {
            "rating" => ReviewOrdering::Rating,
            _ => ReviewOrdering::UpdatedAt,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    pub business_user_id: Option<String>,
    pub reviewer_id: Option<String>,
    pub ordering: ReviewOrdering,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Review {
    pub id: String,
    pub business_user: String,
    pub reviewer: String,
    pub rating: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(business_user: String, reviewer: String, rating: i64, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            business_user,
            reviewer,
            rating,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}
