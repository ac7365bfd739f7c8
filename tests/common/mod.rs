#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, TimeZone, Utc};
use tower::ServiceExt;

use remote_jobs_site::{
    database::CatalogStore,
    error::Result,
    models::{posting::Posting, technology::Technology},
    routes, AppState,
};

#[derive(Default)]
pub struct InMemoryStore {
    pub postings: Vec<Posting>,
    pub technologies: Vec<Technology>,
}

impl InMemoryStore {
    fn newest_first(&self, filter: impl Fn(&Posting) -> bool) -> Vec<Posting> {
        let mut items: Vec<Posting> = self.postings.iter().filter(|p| filter(*p)).cloned().collect();
        items.sort_by(|a, b| b.date_posted.cmp(&a.date_posted).then(b.id.cmp(&a.id)));
        items
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn fetch_latest(&self, limit: i64, offset: i64) -> Result<Vec<Posting>> {
        Ok(self
            .newest_first(|_| true)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn fetch_by_technology(
        &self,
        technology: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Posting>> {
        Ok(self
            .newest_first(|p| p.main_technology == technology)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Posting>> {
        Ok(self.postings.iter().find(|p| p.id == id).cloned())
    }

    async fn count_all(&self) -> Result<i64> {
        Ok(self.postings.len() as i64)
    }

    async fn count_by_technology(&self, technology: &str) -> Result<i64> {
        Ok(self
            .postings
            .iter()
            .filter(|p| p.main_technology == technology)
            .count() as i64)
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>> {
        Ok(self.technologies.clone())
    }

    async fn technology_exists(&self, name: &str) -> Result<bool> {
        Ok(self.technologies.iter().any(|t| t.name == name))
    }
}

pub fn posting(id: i64, title: Option<&str>, technology: &str, plain: &str) -> Posting {
    let posted = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::hours(id);
    Posting {
        id,
        title: title.map(str::to_string),
        content: format!("<p>{}</p>", plain),
        content_pure: Some(plain.to_string()),
        source_link: format!("https://t.me/remote_jobs/{}", id),
        main_technology: technology.to_string(),
        date_posted: posted,
        date_parsed: posted + Duration::minutes(5),
    }
}

pub fn technology(id: i64, name: &str, sort_order: i32) -> Technology {
    Technology {
        id,
        name: name.to_string(),
        keywords: vec![name.to_string()],
        sort_order,
        jobs_count: 0,
    }
}

pub fn state_with(store: impl CatalogStore + 'static) -> AppState {
    AppState::new(Arc::new(store))
}

pub fn app_with(store: impl CatalogStore + 'static) -> Router {
    routes::app(state_with(store))
}

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, "GET", uri).await
}
