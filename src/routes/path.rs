use std::sync::LazyLock;

use regex::Regex;

use crate::dto::page_dto::MAX_PAGE;
use crate::error::{Error, Result};

static JOB_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/job/([0-9]+)(-.*)?$").expect("job path pattern"));
static PAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([0-9]+)$").expect("page path pattern"));
static TECHNOLOGY_PAGE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([^/]+)/([0-9]+)$").expect("technology page pattern"));
static TECHNOLOGY_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([^/]+)$").expect("technology path pattern"));

/// What a catalog URL points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/{page}`
    Page(i64),
    /// `/{technology}`
    Technology(String),
    /// `/{technology}/{page}`
    TechnologyPage { technology: String, page: i64 },
    /// `/job/{id}` or `/job/{id}-{slug}`; the slug is never checked.
    Job(i64),
}

/// Maps a raw request path to a [`Route`].
///
/// Rules are tried in order and the first match wins. A lone segment made of
/// digits is always a page number, so a technology whose name is all digits
/// can only be reached through its `/{technology}/{page}` form. Segments are
/// split before percent-decoding, so an encoded `/` stays inside its segment.
pub fn resolve(path: &str) -> Result<Route> {
    if path == "/" {
        return Ok(Route::Home);
    }

    if let Some(caps) = JOB_PATH.captures(path) {
        let id = caps[1]
            .parse::<i64>()
            .map_err(|_| Error::BadRequest("The job address is not valid".to_string()))?;
        return Ok(Route::Job(id));
    }

    if let Some(caps) = PAGE_PATH.captures(path) {
        return Ok(Route::Page(parse_page(&caps[1])?));
    }

    if let Some(caps) = TECHNOLOGY_PAGE_PATH.captures(path) {
        return Ok(Route::TechnologyPage {
            technology: decode_segment(&caps[1])?,
            page: parse_page(&caps[2])?,
        });
    }

    if let Some(caps) = TECHNOLOGY_PATH.captures(path) {
        let segment = decode_segment(&caps[1])?;
        if segment.parse::<i64>().is_err() {
            return Ok(Route::Technology(segment));
        }
    }

    Err(Error::NotFound(
        "The page you requested does not exist".to_string(),
    ))
}

fn decode_segment(raw: &str) -> Result<String> {
    urlencoding::decode(raw)
        .map(|segment| segment.into_owned())
        .map_err(|_| Error::BadRequest("The address is not valid".to_string()))
}

fn parse_page(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(page) if (1..=MAX_PAGE).contains(&page) => Ok(page),
        _ => Err(Error::BadRequest(
            "The page number is not valid".to_string(),
        )),
    }
}
