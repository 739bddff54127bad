pub mod sqlite_auth_repo;
pub mod sqlite_offer_repo;
pub mod sqlite_order_repo;
pub mod sqlite_profile_repo;
pub mod sqlite_review_repo;
pub mod sqlite_user_repo;
