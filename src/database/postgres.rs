use async_trait::async_trait;
use sqlx::PgPool;

use super::store::CatalogStore;
use crate::error::Result;
use crate::models::{posting::Posting, technology::Technology};

const POSTING_COLUMNS: &str = "id, title, content, content_pure, source_link, main_technology, date_posted, date_parsed";

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn fetch_latest(&self, limit: i64, offset: i64) -> Result<Vec<Posting>> {
        let query = format!(
            "SELECT {}
             FROM jobs_raw
             ORDER BY date_posted DESC, id DESC
             LIMIT $1 OFFSET $2",
            POSTING_COLUMNS
        );

        let items = sqlx::query_as::<_, Posting>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn fetch_by_technology(
        &self,
        technology: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Posting>> {
        let query = format!(
            "SELECT {}
             FROM jobs_raw
             WHERE main_technology = $1
             ORDER BY date_posted DESC, id DESC
             LIMIT $2 OFFSET $3",
            POSTING_COLUMNS
        );

        let items = sqlx::query_as::<_, Posting>(&query)
            .bind(technology)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Posting>> {
        let query = format!("SELECT {} FROM jobs_raw WHERE id = $1", POSTING_COLUMNS);

        let posting = sqlx::query_as::<_, Posting>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(posting)
    }

    async fn count_all(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs_raw")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn count_by_technology(&self, technology: &str) -> Result<i64> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs_raw WHERE main_technology = $1")
                .bind(technology)
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>> {
        let items = sqlx::query_as::<_, Technology>(
            r#"
            SELECT
                t.id,
                t.technology AS name,
                t.keywords,
                t.sort_order,
                COUNT(j.id) AS jobs_count
            FROM technologies t
            LEFT JOIN jobs_raw j ON j.main_technology = t.technology
            GROUP BY t.id, t.technology, t.keywords, t.sort_order
            ORDER BY t.sort_order DESC, t.technology ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn technology_exists(&self, name: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM technologies WHERE technology = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
