use serde::Serialize;

use crate::error::{Error, Result};

pub const PAGE_SIZE: i64 = 10;
/// Highest page whose offset still fits in an `i64`.
pub const MAX_PAGE: i64 = i64::MAX / PAGE_SIZE + 1;

/// Which slice of the catalog a listing page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub technology: Option<String>,
    pub page: i64,
}

impl PageRequest {
    pub fn new(technology: Option<String>, page: i64) -> Self {
        Self {
            technology,
            page: page.max(1),
        }
    }

    pub fn offset(&self) -> Result<i64> {
        (self.page - 1)
            .checked_mul(PAGE_SIZE)
            .ok_or_else(|| Error::Internal(format!("page {} is out of range", self.page)))
    }
}

pub fn total_pages(total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}
