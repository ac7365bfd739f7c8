use async_trait::async_trait;

use crate::error::Result;
use crate::models::{posting::Posting, technology::Technology};

/// Read-only access to the job catalog.
///
/// Postings come back newest first. Technologies come back ordered by
/// `sort_order` descending, then by name ascending.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn fetch_latest(&self, limit: i64, offset: i64) -> Result<Vec<Posting>>;

    async fn fetch_by_technology(
        &self,
        technology: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Posting>>;

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Posting>>;

    async fn count_all(&self) -> Result<i64>;

    async fn count_by_technology(&self, technology: &str) -> Result<i64>;

    async fn list_technologies(&self) -> Result<Vec<Technology>>;

    async fn technology_exists(&self, name: &str) -> Result<bool>;
}
