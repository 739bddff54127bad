use crate::domain::{
    models::{profile::{Profile, ProfileWithUser}, user::Role},
    ports::ProfileRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

const PROFILE_WITH_USER: &str =
    "SELECT p.id, p.user_id, p.role, p.first_name, p.last_name, p.location, p.tel, p.description, p.working_hours, p.file, p.created_at, u.username, u.email
     FROM profiles p JOIN users u ON u.id = p.user_id";

pub struct SqliteProfileRepo {
    pool: SqlitePool,
}

impl SqliteProfileRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepo {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<ProfileWithUser>, AppError> {
        sqlx::query_as::<_, ProfileWithUser>(&format!("{} WHERE p.user_id = ?", PROFILE_WITH_USER))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, profile: &Profile) -> Result<Profile, AppError> {
        // role is fixed at creation and deliberately absent here
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET first_name=?, last_name=?, location=?, tel=?, description=?, working_hours=?, file=?
             WHERE user_id=?
             RETURNING *",
        )
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.location)
            .bind(&profile.tel)
            .bind(&profile.description)
            .bind(&profile.working_hours)
            .bind(&profile.file)
            .bind(&profile.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<ProfileWithUser>, AppError> {
        sqlx::query_as::<_, ProfileWithUser>(&format!("{} WHERE p.role = ? ORDER BY p.created_at DESC", PROFILE_WITH_USER))
            .bind(role)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_by_role(&self, role: Role) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM profiles WHERE role = ?")
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
