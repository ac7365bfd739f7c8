use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Technology {
    pub id: i64,
    pub name: String,
    pub keywords: Vec<String>,
    pub sort_order: i32,
    pub jobs_count: i64,
}
