use chrono::{DateTime, NaiveDate};

pub trait DayFormatter: Send + Sync {
    fn day_name(&self, iso_date: &str) -> String;
}

/// Formats the weekday of an ISO-8601 timestamp, e.g. `Monday`.
///
/// Unparseable input yields an empty string, the trending feed renders it as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoDayFormatter;

impl DayFormatter for ChronoDayFormatter {
    fn day_name(&self, iso_date: &str) -> String {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(iso_date) {
            return datetime.format("%A").to_string();
        }
        // Plain `YYYY-MM-DD`, possibly followed by a non-RFC 3339 time part
        let date_part: String = iso_date.chars().take(10).collect();
        match NaiveDate::parse_from_str(&date_part, "%Y-%m-%d") {
            Ok(date) => date.format("%A").to_string(),
            Err(e) => {
                tracing::debug!("Failed to parse date: date={}, e={:?}", iso_date, e);
                String::new()
            }
        }
    }
}
