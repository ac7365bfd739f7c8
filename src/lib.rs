pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::database::CatalogStore;
use crate::services::{job_service::JobService, technology_service::TechnologyService};

#[derive(Clone)]
pub struct AppState {
    pub job_service: JobService,
    pub technology_service: TechnologyService,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        let technology_service = TechnologyService::new(store.clone());
        let job_service = JobService::new(store, technology_service.clone());

        Self {
            job_service,
            technology_service,
        }
    }
}
