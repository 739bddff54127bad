use crate::domain::models::{
    auth::RefreshTokenRecord,
    offer::{Offer, OfferDetail, OfferQuery},
    order::{Order, OrderStatus},
    profile::{Profile, ProfileWithUser},
    review::{Review, ReviewQuery},
    user::{Role, User},
};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Registration writes the user and its profile in one transaction; a
    /// user row without a profile never becomes visible.
    async fn create_with_profile(&self, user: &User, profile: &Profile) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn exists(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<ProfileWithUser>, AppError>;
    async fn update(&self, profile: &Profile) -> Result<Profile, AppError>;
    async fn list_by_role(&self, role: Role) -> Result<Vec<ProfileWithUser>, AppError>;
    async fn count_by_role(&self, role: Role) -> Result<i64, AppError>;
}

#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Inserts the offer and all of its tiers in one transaction.
    async fn create_with_details(&self, offer: &Offer, details: &[OfferDetail]) -> Result<Offer, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Offer>, AppError>;
    /// Returns the total match count alongside the requested page.
    async fn list(&self, query: &OfferQuery) -> Result<(i64, Vec<Offer>), AppError>;
    async fn list_details(&self, offer_id: &str) -> Result<Vec<OfferDetail>, AppError>;
    async fn find_detail(&self, detail_id: &str) -> Result<Option<OfferDetail>, AppError>;
    async fn find_detail_of_offer(&self, offer_id: &str, detail_id: &str) -> Result<Option<OfferDetail>, AppError>;
    /// Writes the offer row and the given tier rows in one transaction.
    async fn update_with_details(&self, offer: &Offer, details: &[OfferDetail]) -> Result<Offer, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<Order, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, AppError>;
    /// Orders where the user is the customer OR the business side.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Order>, AppError>;
    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count_by_business_and_status(&self, business_user_id: &str, status: OrderStatus) -> Result<i64, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, AppError>;
    async fn list(&self, query: &ReviewQuery) -> Result<Vec<Review>, AppError>;
    async fn exists_for_pair(&self, reviewer: &str, business_user: &str) -> Result<bool, AppError>;
    async fn update(&self, review: &Review) -> Result<Review, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count_and_average(&self) -> Result<(i64, Option<f64>), AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}
