use chrono::{DateTime, Utc};
use serde::Serialize;

use super::page_dto::PAGE_SIZE;
use super::technology_dto::{technology_path, TechnologyView};
use crate::models::posting::Posting;
use crate::utils::{
    preview::{preview, PREVIEW_LINES},
    sanitize::{sanitize, SafeHtml},
    slug::slugify,
    text::cut_at_space,
    time::format_date,
};

pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// One posting, ready for a template.
#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    pub id: i64,
    pub title: String,
    /// Sanitized full body for the details page.
    pub content: SafeHtml,
    pub content_preview: SafeHtml,
    pub source_link: String,
    pub main_technology: String,
    pub date_posted: DateTime<Utc>,
    pub date_posted_str: String,
    pub slug: String,
    pub url: String,
    pub meta_description: String,
}

impl JobView {
    /// `technology` is the filter the posting is shown under; it only
    /// affects the meta description.
    pub fn new(posting: &Posting, technology: Option<&str>) -> Self {
        let title = display_title(posting);
        let plain = posting.content_pure.as_deref().unwrap_or_default();

        Self {
            id: posting.id,
            slug: slugify(&title),
            url: job_path(posting.id),
            content: sanitize(&posting.content),
            content_preview: preview(plain, PREVIEW_LINES),
            meta_description: meta_description(plain, technology),
            source_link: external_link(&posting.source_link),
            main_technology: posting.main_technology.clone(),
            date_posted: posting.date_posted,
            date_posted_str: format_date(posting.date_posted),
            title,
        }
    }

    pub fn technology_url(&self) -> String {
        technology_path(&self.main_technology)
    }
}

/// Canonical job address. `/job/{id}-{slug}` resolves to the same page.
pub fn job_path(id: i64) -> String {
    format!("/job/{}", id)
}

// Scraped links end up in an href; anything but http(s) is dropped.
fn external_link(link: &str) -> String {
    let link = link.trim();
    let lower = link.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        link.to_string()
    } else {
        String::new()
    }
}

fn display_title(posting: &Posting) -> String {
    match posting.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("Job in {}", posting.main_technology),
    }
}

pub fn meta_description(plain: &str, technology: Option<&str>) -> String {
    let trimmed = plain.trim();
    let technology = technology.filter(|t| !t.is_empty());

    if trimmed.is_empty() {
        return match technology {
            Some(tech) => format!(
                "Remote {} job. Current IT job offers with the option to work remotely.",
                tech
            ),
            None => "Current remote jobs in IT. Work from anywhere in the world.".to_string(),
        };
    }

    let summary = match cut_at_space(trimmed, META_DESCRIPTION_MAX_CHARS) {
        Some(cut) => format!("{}...", cut),
        None => trimmed.to_string(),
    };

    match technology {
        Some(tech) => format!("{} | Remote work in {}", summary, tech),
        None => summary,
    }
}

/// A listing page: one page of postings plus navigation state.
#[derive(Debug, Clone, Serialize)]
pub struct JobListView {
    pub jobs: Vec<JobView>,
    pub technologies: Vec<TechnologyView>,
    pub current_page: i64,
    pub total_pages: i64,
    pub technology: Option<String>,
    pub is_filtered: bool,
    pub prev_page: i64,
    pub next_page: i64,
    pub page_title: String,
    pub base_url: String,
    pub meta_description: String,
}

impl JobListView {
    pub fn new(
        postings: &[Posting],
        technologies: Vec<TechnologyView>,
        current_page: i64,
        total_pages: i64,
        technology: Option<String>,
    ) -> Self {
        let jobs = postings
            .iter()
            .map(|posting| JobView::new(posting, technology.as_deref()))
            .collect();

        let (prev_page, next_page) = if total_pages <= 0 {
            (current_page, current_page)
        } else {
            (
                current_page.saturating_sub(1).max(1),
                current_page.saturating_add(1).min(total_pages),
            )
        };

        // rough figure, not an exact count
        let approx_jobs = total_pages.saturating_mul(PAGE_SIZE);
        let (page_title, base_url, meta_description) = match technology.as_deref() {
            Some(tech) => (
                format!("{} remote jobs", tech),
                format!("{}/", technology_path(tech)),
                format!(
                    "Current remote {} jobs. {}+ offers to work from anywhere in the world. Updated daily.",
                    tech, approx_jobs
                ),
            ),
            None => (
                "Remote IT jobs".to_string(),
                "/".to_string(),
                format!(
                    "Fresh remote jobs in IT. {}+ offers to work from anywhere in the world. Filters by popular technologies, updated daily.",
                    approx_jobs
                ),
            ),
        };

        Self {
            jobs,
            technologies,
            current_page,
            total_pages,
            is_filtered: technology.is_some(),
            technology,
            prev_page,
            next_page,
            page_title,
            base_url,
            meta_description,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn prev_url(&self) -> String {
        self.page_url(self.prev_page)
    }

    pub fn next_url(&self) -> String {
        self.page_url(self.next_page)
    }

    pub fn page_url(&self, page: i64) -> String {
        if page <= 1 && !self.is_filtered {
            return "/".to_string();
        }
        if page <= 1 {
            return self.base_url.trim_end_matches('/').to_string();
        }
        format!("{}{}", self.base_url, page)
    }
}

/// The details page of a single posting.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetailView {
    pub job: JobView,
    pub related_jobs: Vec<JobView>,
    pub page_title: String,
    pub technologies: Vec<TechnologyView>,
    pub meta_description: String,
}

impl JobDetailView {
    pub fn new(posting: &Posting, related: &[Posting], technologies: Vec<TechnologyView>) -> Self {
        let technology = Some(posting.main_technology.as_str());
        let job = JobView::new(posting, technology);
        let related_jobs = related
            .iter()
            .map(|item| JobView::new(item, technology))
            .collect();

        Self {
            page_title: job.title.clone(),
            meta_description: job.meta_description.clone(),
            job,
            related_jobs,
            technologies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn posting(id: i64, title: Option<&str>, plain: &str) -> Posting {
        Posting {
            id,
            title: title.map(str::to_string),
            content: format!("<p>{}</p><script>x()</script>", plain),
            content_pure: Some(plain.to_string()),
            source_link: "https://t.me/remote/1".to_string(),
            main_technology: "golang".to_string(),
            date_posted: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            date_parsed: Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap(),
        }
    }

    #[test]
    fn job_view_derives_presentation_fields() {
        let view = JobView::new(&posting(17, Some("Senior Go Engineer"), "Build APIs"), None);
        assert_eq!(view.title, "Senior Go Engineer");
        assert_eq!(view.slug, "senior-go-engineer");
        assert_eq!(view.url, "/job/17");
        assert_eq!(view.date_posted_str, "01.05.2024");
        assert_eq!(view.content.as_str(), "<p>Build APIs</p>");
        assert_eq!(view.content_preview.as_str(), "Build APIs");
        assert_eq!(view.meta_description, "Build APIs");
        assert_eq!(view.source_link, "https://t.me/remote/1");
        assert_eq!(view.technology_url(), "/golang");
    }

    #[test]
    fn unsafe_source_links_are_dropped() {
        let mut raw = posting(5, Some("X"), "");
        raw.source_link = "javascript:alert(1)".to_string();
        assert_eq!(JobView::new(&raw, None).source_link, "");
    }

    #[test]
    fn missing_title_falls_back_to_technology() {
        let view = JobView::new(&posting(3, None, ""), None);
        assert_eq!(view.title, "Job in golang");
        assert_eq!(view.slug, "job-in-golang");

        let view = JobView::new(&posting(3, Some("   "), ""), None);
        assert_eq!(view.title, "Job in golang");
    }

    #[test]
    fn meta_description_cuts_and_mentions_filter() {
        let body = "lorem ipsum ".repeat(30);
        let meta = meta_description(&body, Some("rust"));
        let (summary, suffix) = meta.split_once(" | ").unwrap();
        assert_eq!(suffix, "Remote work in rust");
        assert!(summary.ends_with("ipsum...") || summary.ends_with("lorem..."));
        assert!(summary.chars().count() <= META_DESCRIPTION_MAX_CHARS + 3);

        assert_eq!(meta_description("  short  ", None), "short");
        assert_eq!(meta_description("short", Some("go")), "short | Remote work in go");
    }

    #[test]
    fn meta_description_fallbacks() {
        assert!(meta_description("   ", Some("python")).contains("python"));
        assert_eq!(
            meta_description("", None),
            "Current remote jobs in IT. Work from anywhere in the world."
        );
    }

    #[test]
    fn pagination_bounds() {
        let single = JobListView::new(&[], vec![], 1, 1, None);
        assert_eq!((single.prev_page, single.next_page), (1, 1));

        let past_end = JobListView::new(&[], vec![], 5, 3, None);
        assert_eq!(past_end.next_page, 3);
        assert_eq!(past_end.prev_page, 4);

        let empty = JobListView::new(&[], vec![], 1, 0, None);
        assert_eq!((empty.prev_page, empty.next_page), (1, 1));

        let middle = JobListView::new(&[], vec![], 2, 4, None);
        assert_eq!((middle.prev_page, middle.next_page), (1, 3));
        assert!(middle.has_prev() && middle.has_next());
    }

    #[test]
    fn neighbour_links_follow_pagination_bounds() {
        let view = JobListView::new(&[], vec![], 2, 3, Some("rust".to_string()));
        assert_eq!(view.prev_url(), "/rust");
        assert_eq!(view.next_url(), "/rust/3");

        let view = JobListView::new(&[], vec![], 2, 3, None);
        assert_eq!(view.prev_url(), "/");
        assert_eq!(view.next_url(), "/3");
    }

    #[test]
    fn last_representable_page_does_not_overflow() {
        let view = JobListView::new(&[], vec![], i64::MAX, i64::MAX, None);
        assert_eq!(view.next_page, i64::MAX);
        assert!(!view.has_next());
    }

    #[test]
    fn list_view_filter_state_and_seo() {
        let postings = vec![posting(1, Some("A"), "body"), posting(2, None, "")];
        let view = JobListView::new(&postings, vec![], 1, 4, Some("golang".to_string()));
        assert!(view.is_filtered);
        assert_eq!(view.base_url, "/golang/");
        assert_eq!(view.page_url(3), "/golang/3");
        assert_eq!(view.page_url(1), "/golang");
        assert!(view.meta_description.contains("golang"));
        assert!(view.meta_description.contains("40+"));
        assert_eq!(view.jobs[0].meta_description, "body | Remote work in golang");

        let view = JobListView::new(&postings, vec![], 2, 7, None);
        assert!(!view.is_filtered);
        assert_eq!(view.base_url, "/");
        assert_eq!(view.page_url(2), "/2");
        assert_eq!(view.page_url(1), "/");
        assert!(view.meta_description.contains("70+"));
        assert_eq!(view.jobs[0].meta_description, "body");
    }

    #[test]
    fn detail_view_composes_job_view() {
        let main = posting(9, Some("Rust dev"), "Write Rust");
        let related = vec![posting(10, Some("Go dev"), "Write Go")];
        let view = JobDetailView::new(&main, &related, vec![]);
        assert_eq!(view.job.id, 9);
        assert_eq!(view.page_title, "Rust dev");
        assert_eq!(view.meta_description, "Write Rust | Remote work in golang");
        assert_eq!(view.related_jobs.len(), 1);
        assert_eq!(view.related_jobs[0].url, "/job/10");
    }
}
