use std::sync::Arc;

use crate::database::CatalogStore;
use crate::dto::page_dto::{total_pages, PageRequest, PAGE_SIZE};
use crate::error::{Error, Result};
use crate::models::posting::Posting;
use crate::services::technology_service::TechnologyService;

#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn CatalogStore>,
    technologies: TechnologyService,
}

/// One page of postings and the page count of the whole selection.
#[derive(Debug, Clone)]
pub struct JobPage {
    pub items: Vec<Posting>,
    pub total_pages: i64,
}

impl JobService {
    pub fn new(store: Arc<dyn CatalogStore>, technologies: TechnologyService) -> Self {
        Self {
            store,
            technologies,
        }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<JobPage> {
        match request.technology.as_deref() {
            Some(technology) => self.by_technology(technology, request).await,
            None => self.latest(request).await,
        }
    }

    pub async fn latest(&self, request: &PageRequest) -> Result<JobPage> {
        let items = self
            .store
            .fetch_latest(PAGE_SIZE, request.offset()?)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, page = request.page, "Failed to fetch latest jobs");
                e
            })?;

        // A page of jobs without a count still renders, just without pagination.
        let total_pages = match self.store.count_all().await {
            Ok(total) => total_pages(total),
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to count jobs");
                0
            }
        };

        Ok(JobPage { items, total_pages })
    }

    pub async fn by_technology(&self, technology: &str, request: &PageRequest) -> Result<JobPage> {
        if !self.technologies.exists(technology).await? {
            tracing::warn!(technology = %technology, "Unknown technology requested");
            return Err(Error::NotFound(format!(
                "There is no technology called \"{}\"",
                technology
            )));
        }

        let items = self
            .store
            .fetch_by_technology(technology, PAGE_SIZE, request.offset()?)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    technology = %technology,
                    page = request.page,
                    "Failed to fetch jobs by technology"
                );
                e
            })?;

        let total_pages = match self.store.count_by_technology(technology).await {
            Ok(total) => total_pages(total),
            Err(e) => {
                tracing::warn!(error = ?e, technology = %technology, "Failed to count jobs by technology");
                0
            }
        };

        Ok(JobPage { items, total_pages })
    }

    pub async fn by_id(&self, id: i64) -> Result<Posting> {
        let posting = self.store.fetch_by_id(id).await.map_err(|e| {
            tracing::error!(error = ?e, job_id = id, "Failed to fetch job");
            e
        })?;

        posting.ok_or_else(|| {
            Error::NotFound("The job you are looking for does not exist or was removed".to_string())
        })
    }

    /// Other postings with the same main technology, newest first.
    /// Failures only cost the related block, never the page.
    pub async fn related(&self, posting: &Posting, limit: usize) -> Vec<Posting> {
        match self
            .store
            .fetch_by_technology(&posting.main_technology, limit as i64 + 1, 0)
            .await
        {
            Ok(items) => items
                .into_iter()
                .filter(|item| item.id != posting.id)
                .take(limit)
                .collect(),
            Err(e) => {
                tracing::warn!(error = ?e, job_id = posting.id, "Failed to fetch related jobs");
                Vec::new()
            }
        }
    }
}
