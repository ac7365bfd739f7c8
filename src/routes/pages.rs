use axum::{
    extract::State,
    http::Uri,
    response::Html,
};

use super::path::{resolve, Route};
use crate::{
    dto::{
        job_dto::{JobDetailView, JobListView},
        page_dto::PageRequest,
    },
    error::Result,
    render, AppState,
};

pub const RELATED_JOBS: usize = 3;

/// Entry point for every catalog page.
#[axum::debug_handler]
pub async fn dispatch(State(state): State<AppState>, uri: Uri) -> Result<Html<String>> {
    let request = match resolve(uri.path())? {
        Route::Job(id) => {
            let view = detail_view(&state, id).await?;
            return Ok(Html(render::job_details_page(&view)?));
        }
        Route::Home => PageRequest::new(None, 1),
        Route::Page(page) => PageRequest::new(None, page),
        Route::Technology(technology) => PageRequest::new(Some(technology), 1),
        Route::TechnologyPage { technology, page } => PageRequest::new(Some(technology), page),
    };

    let view = list_view(&state, &request).await?;
    Ok(Html(render::home_page(&view)?))
}

pub async fn list_view(state: &AppState, request: &PageRequest) -> Result<JobListView> {
    let (technologies, page) = tokio::try_join!(
        state.technology_service.list(),
        state.job_service.list(request),
    )?;

    Ok(JobListView::new(
        &page.items,
        technologies,
        request.page,
        page.total_pages,
        request.technology.clone(),
    ))
}

pub async fn detail_view(state: &AppState, id: i64) -> Result<JobDetailView> {
    let posting = state.job_service.by_id(id).await?;
    let (technologies, related) = tokio::join!(
        state.technology_service.list(),
        state.job_service.related(&posting, RELATED_JOBS),
    );

    Ok(JobDetailView::new(&posting, &related, technologies?))
}
