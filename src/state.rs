use std::sync::Arc;
use crate::domain::ports::{
    AuthRepository, OfferRepository, OrderRepository, ProfileRepository,
    ReviewRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub offer_repo: Arc<dyn OfferRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub auth_service: Arc<AuthService>,
}
