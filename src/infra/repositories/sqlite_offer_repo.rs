use crate::domain::{
    models::offer::{Offer, OfferDetail, OfferOrdering, OfferQuery},
    ports::OfferRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

// Correlated subquery so min_price ordering works without materializing
// the aggregate on the row.
const MIN_PRICE_EXPR: &str = "(SELECT MIN(price) FROM offer_details d WHERE d.offer_id = offers.id)";

pub struct SqliteOfferRepo {
    pool: SqlitePool,
}

impl SqliteOfferRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn where_clause(query: &OfferQuery) -> String {
        let mut conditions: Vec<&str> = Vec::new();
        if query.creator_id.is_some() {
            conditions.push("user_id = ?");
        }
        if query.search.is_some() {
            conditions.push("(LOWER(title) LIKE '%' || LOWER(?) || '%' OR LOWER(description) LIKE '%' || LOWER(?) || '%')");
        }

        if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        }
    }
}

#[async_trait]
impl OfferRepository for SqliteOfferRepo {
    async fn create_with_details(&self, offer: &Offer, details: &[OfferDetail]) -> Result<Offer, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Offer>(
            "INSERT INTO offers (id, user_id, title, description, image, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&offer.id)
            .bind(&offer.user_id)
            .bind(&offer.title)
            .bind(&offer.description)
            .bind(&offer.image)
            .bind(offer.created_at)
            .bind(offer.updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for detail in details {
            sqlx::query(
                "INSERT INTO offer_details (id, offer_id, title, revisions, delivery_time_in_days, price, features, offer_type)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
                .bind(&detail.id)
                .bind(&detail.offer_id)
                .bind(&detail.title)
                .bind(detail.revisions)
                .bind(detail.delivery_time_in_days)
                .bind(detail.price)
                .bind(&detail.features)
                .bind(detail.offer_type)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Offer>, AppError> {
        sqlx::query_as::<_, Offer>("SELECT * FROM offers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, query: &OfferQuery) -> Result<(i64, Vec<Offer>), AppError> {
        let where_clause = Self::where_clause(query);

        let count_sql = format!("SELECT COUNT(*) AS count FROM offers{}", where_clause);
        let mut count_stmt = sqlx::query(&count_sql);
        if let Some(creator_id) = &query.creator_id {
            count_stmt = count_stmt.bind(creator_id);
        }
        if let Some(search) = &query.search {
            count_stmt = count_stmt.bind(search).bind(search);
        }
        let count = count_stmt
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?
            .get::<i64, _>("count");

        let order_clause = match query.ordering {
            OfferOrdering::UpdatedAtDesc => "updated_at DESC".to_string(),
            OfferOrdering::UpdatedAtAsc => "updated_at ASC".to_string(),
            OfferOrdering::MinPriceAsc => format!("{} ASC", MIN_PRICE_EXPR),
            OfferOrdering::MinPriceDesc => format!("{} DESC", MIN_PRICE_EXPR),
        };

        let rows_sql = format!(
            "SELECT * FROM offers{} ORDER BY {} LIMIT ? OFFSET ?",
            where_clause, order_clause
        );
        let mut rows_stmt = sqlx::query_as::<_, Offer>(&rows_sql);
        if let Some(creator_id) = &query.creator_id {
            rows_stmt = rows_stmt.bind(creator_id);
        }
        if let Some(search) = &query.search {
            rows_stmt = rows_stmt.bind(search).bind(search);
        }
        let offers = rows_stmt
            .bind(query.page_size)
            .bind((query.page - 1) * query.page_size)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok((count, offers))
    }

    async fn list_details(&self, offer_id: &str) -> Result<Vec<OfferDetail>, AppError> {
        sqlx::query_as::<_, OfferDetail>("SELECT * FROM offer_details WHERE offer_id = ? ORDER BY price ASC")
            .bind(offer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_detail(&self, detail_id: &str) -> Result<Option<OfferDetail>, AppError> {
        sqlx::query_as::<_, OfferDetail>("SELECT * FROM offer_details WHERE id = ?")
            .bind(detail_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_detail_of_offer(&self, offer_id: &str, detail_id: &str) -> Result<Option<OfferDetail>, AppError> {
        sqlx::query_as::<_, OfferDetail>("SELECT * FROM offer_details WHERE id = ? AND offer_id = ?")
            .bind(detail_id)
            .bind(offer_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_with_details(&self, offer: &Offer, details: &[OfferDetail]) -> Result<Offer, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_as::<_, Offer>(
            "UPDATE offers SET title=?, description=?, image=?, updated_at=?
             WHERE id=?
             RETURNING *",
        )
            .bind(&offer.title)
            .bind(&offer.description)
            .bind(&offer.image)
            .bind(offer.updated_at)
            .bind(&offer.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for detail in details {
            sqlx::query(
                "UPDATE offer_details SET title=?, revisions=?, delivery_time_in_days=?, price=?, features=?, offer_type=?
                 WHERE id=? AND offer_id=?",
            )
                .bind(&detail.title)
                .bind(detail.revisions)
                .bind(detail.delivery_time_in_days)
                .bind(detail.price)
                .bind(&detail.features)
                .bind(detail.offer_type)
                .bind(&detail.id)
                .bind(&offer.id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM offers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Offer not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM offers")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
