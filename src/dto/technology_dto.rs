use serde::Serialize;

use crate::models::technology::Technology;

#[derive(Debug, Clone, Serialize)]
pub struct TechnologyView {
    pub id: i64,
    pub name: String,
    pub keywords: Vec<String>,
    pub sort_order: i32,
    pub url: String,
    pub jobs_count: i64,
}

pub fn technology_path(name: &str) -> String {
    format!("/{}", urlencoding::encode(name))
}

impl From<Technology> for TechnologyView {
    fn from(value: Technology) -> Self {
        Self {
            url: technology_path(&value.name),
            id: value.id,
            name: value.name,
            keywords: value.keywords,
            sort_order: value.sort_order,
            jobs_count: value.jobs_count,
        }
    }
}
