use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Advertisement record. `id` and `user_id` never change after creation;
/// every other mutation refreshes `updated_at`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Optional list predicates; absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct AdFilter {
    pub user_id: Option<i64>,
    pub search: Option<String>,
}

impl AdFilter {
    fn search_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|s| format!("%{}%", s.trim()))
    }
}

impl Ad {
    pub async fn list(
        db: &PgPool,
        filter: &AdFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Ad>, sqlx::Error> {
        sqlx::query_as::<_, Ad>(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM ads
            WHERE ($1::BIGINT IS NULL OR user_id = $1)
              AND ($2::TEXT IS NULL OR title ILIKE $2 OR description ILIKE $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.search_pattern())
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    /// Row count under the same predicate as `list`.
    pub async fn count(db: &PgPool, filter: &AdFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM ads
            WHERE ($1::BIGINT IS NULL OR user_id = $1)
              AND ($2::TEXT IS NULL OR title ILIKE $2 OR description ILIKE $2)
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.search_pattern())
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Ad>, sqlx::Error> {
        sqlx::query_as::<_, Ad>(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM ads
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: i64,
        title: &str,
        description: &str,
    ) -> Result<Ad, sqlx::Error> {
        sqlx::query_as::<_, Ad>(
            r#"
            INSERT INTO ads (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, user_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    pub async fn update(
        db: &PgPool,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Ad, sqlx::Error> {
        sqlx::query_as::<_, Ad>(
            r#"
            UPDATE ads
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .fetch_one(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_pattern_wraps_and_trims() {
        let filter = AdFilter {
            user_id: None,
            search: Some("  bike  ".into()),
        };
        assert_eq!(filter.search_pattern().as_deref(), Some("%bike%"));
    }

    #[test]
    fn empty_filter_has_no_pattern() {
        assert_eq!(AdFilter::default().search_pattern(), None);
    }
}
