use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting as stored in `jobs_raw`. `content` is raw markup from the
/// source and must go through the sanitizer before it reaches a page.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Posting {
    pub id: i64,
    pub title: Option<String>,
    pub content: String,
    pub content_pure: Option<String>,
    pub source_link: String,
    pub main_technology: String,
    pub date_posted: DateTime<Utc>,
    pub date_parsed: DateTime<Utc>,
}
