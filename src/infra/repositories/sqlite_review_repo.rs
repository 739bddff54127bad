use crate::domain::{
    models::review::{Review, ReviewOrdering, ReviewQuery},
    ports::ReviewRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqliteReviewRepo {
    pool: SqlitePool,
}

impl SqliteReviewRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, business_user, reviewer, rating, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&review.id)
            .bind(&review.business_user)
            .bind(&review.reviewer)
            .bind(review.rating)
            .bind(&review.description)
            .bind(review.created_at)
            .bind(review.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, query: &ReviewQuery) -> Result<Vec<Review>, AppError> {
        let mut conditions: Vec<&str> = Vec::new();
        if query.business_user_id.is_some() {
            conditions.push("business_user = ?");
        }
        if query.reviewer_id.is_some() {
            conditions.push("reviewer = ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let order_clause = match query.ordering {
            ReviewOrdering::Rating => "rating DESC, updated_at DESC",
            ReviewOrdering::UpdatedAt => "updated_at DESC",
        };

        let sql = format!("SELECT * FROM reviews{} ORDER BY {}", where_clause, order_clause);
        let mut stmt = sqlx::query_as::<_, Review>(&sql);
        if let Some(business_user_id) = &query.business_user_id {
            stmt = stmt.bind(business_user_id);
        }
        if let Some(reviewer_id) = &query.reviewer_id {
            stmt = stmt.bind(reviewer_id);
        }

        stmt.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn exists_for_pair(&self, reviewer: &str, business_user: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM reviews WHERE reviewer = ? AND business_user = ?")
            .bind(reviewer)
            .bind(business_user)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count") > 0)
    }

    async fn update(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET rating = ?, description = ?, updated_at = ? WHERE id = ? RETURNING *",
        )
            .bind(review.rating)
            .bind(&review.description)
            .bind(Utc::now())
            .bind(&review.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Review not found".into()));
        }
        Ok(())
    }

    async fn count_and_average(&self) -> Result<(i64, Option<f64>), AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count, AVG(rating) AS average FROM reviews")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok((row.get::<i64, _>("count"), row.get::<Option<f64>, _>("average")))
    }
}
