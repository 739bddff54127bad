use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    // role names arrive as "type" on the wire
    #[serde(rename = "type")]
    pub user_type: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
    pub tel: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    pub file: Option<String>,
}

#[derive(Deserialize)]
pub struct OfferDetailSpec {
    pub title: String,
    pub revisions: Option<i64>,
    pub delivery_time_in_days: i64,
    pub price: f64,
    pub features: Option<Vec<String>>,
    pub offer_type: String,
}

#[derive(Deserialize)]
pub struct CreateOfferRequest {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub details: Vec<OfferDetailSpec>,
}

#[derive(Deserialize)]
pub struct UpdateOfferDetailSpec {
    pub id: Option<String>,
    pub title: Option<String>,
    pub revisions: Option<i64>,
    pub delivery_time_in_days: Option<i64>,
    pub price: Option<f64>,
    pub features: Option<Vec<String>>,
    pub offer_type: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateOfferRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub details: Option<Vec<UpdateOfferDetailSpec>>,
}

#[derive(Deserialize)]
pub struct OfferListParams {
    pub creator_id: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub offer_detail_id: String,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub business_user: String,
    pub rating: i64,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: Option<i64>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct ReviewListParams {
    pub business_user_id: Option<String>,
    pub reviewer_id: Option<String>,
    pub ordering: Option<String>,
}
