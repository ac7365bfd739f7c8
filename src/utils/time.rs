use chrono::{DateTime, Utc};

pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}
