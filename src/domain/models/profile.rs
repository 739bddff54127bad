use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::user::Role;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub tel: String,
    pub description: String,
    pub working_hours: String,
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile row joined with the account fields the read views expose.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ProfileWithUser {
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub tel: String,
    pub description: String,
    pub working_hours: String,
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub email: String,
}

impl ProfileWithUser {
    pub fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            role: self.role,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            location: self.location.clone(),
            tel: self.tel.clone(),
            description: self.description.clone(),
            working_hours: self.working_hours.clone(),
            file: self.file.clone(),
            created_at: self.created_at,
        }
    }
}

impl Profile {
    pub fn new(user_id: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            role,
            first_name: String::new(),
            last_name: String::new(),
            location: String::new(),
            tel: String::new(),
            description: String::new(),
            working_hours: String::new(),
            file: None,
            created_at: Utc::now(),
        }
    }
}
