use askama::Template;

use crate::dto::{
    error_dto::ErrorView,
    job_dto::{JobDetailView, JobListView},
};
use crate::error::Result;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub view: &'a JobListView,
}

#[derive(Template)]
#[template(path = "pages/job_details.html")]
pub struct JobDetailsTemplate<'a> {
    pub view: &'a JobDetailView,
}

#[derive(Template)]
#[template(path = "errors/error.html")]
pub struct ErrorTemplate<'a> {
    pub view: &'a ErrorView,
}

pub fn home_page(view: &JobListView) -> Result<String> {
    Ok(HomeTemplate { view }.render()?)
}

pub fn job_details_page(view: &JobDetailView) -> Result<String> {
    Ok(JobDetailsTemplate { view }.render()?)
}

pub fn error_page(view: &ErrorView) -> Result<String> {
    Ok(ErrorTemplate { view }.render()?)
}
