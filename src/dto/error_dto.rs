use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub status_code: u16,
    pub title: String,
    pub message: String,
    pub page_title: String,
    pub meta_description: String,
}

impl ErrorView {
    pub fn new(status: StatusCode, title: String, message: String) -> Self {
        Self {
            status_code: status.as_u16(),
            meta_description: format!("Error on the remote IT jobs site. {}", message),
            page_title: "Error".to_string(),
            title,
            message,
        }
    }
}
