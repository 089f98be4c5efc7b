//! Job Normalizer - Maps upstream records into the fixed output schema
//!
//! Never fails: every absent field falls back to a documented default.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::domain::entities::{NormalizedJob, RawUpstreamJob, JOB_SOURCE};
use crate::domain::value_objects::SalaryRange;

/// Descriptions longer than this many characters are cut and get an ellipsis.
pub const DESCRIPTION_LIMIT: usize = 300;

const NO_TITLE: &str = "No title available";
const NO_COMPANY: &str = "Company not specified";
const NO_LOCATION: &str = "Location not specified";
const NO_DESCRIPTION: &str = "No description available";
const NO_CATEGORY: &str = "Not specified";
const NO_LINK: &str = "#";

// Lightweight on purpose: removes `<...>` spans verbatim, no entity decoding.
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"));

/// Normalize one record, using the current time when `created` is unusable.
pub fn normalize(raw: &RawUpstreamJob, fallback_location: &str) -> NormalizedJob {
    normalize_at(raw, fallback_location, Utc::now())
}

/// Normalize one record with an explicit fallback timestamp.
pub fn normalize_at(
    raw: &RawUpstreamJob,
    fallback_location: &str,
    now: DateTime<Utc>,
) -> NormalizedJob {
    let location = raw
        .location
        .clone()
        .or_else(|| {
            let fallback = fallback_location.trim();
            (!fallback.is_empty()).then(|| fallback.to_string())
        })
        .unwrap_or_else(|| NO_LOCATION.to_string());

    NormalizedJob {
        title: or_default(&raw.title, NO_TITLE),
        company: or_default(&raw.company, NO_COMPANY),
        location,
        description: raw
            .description
            .as_deref()
            .map(clean_description)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        salary: SalaryRange::new(raw.salary_min, raw.salary_max).to_string(),
        link: or_default(&raw.redirect_url, NO_LINK),
        source: JOB_SOURCE.to_string(),
        posted_date: raw
            .created
            .as_deref()
            .and_then(parse_created)
            .unwrap_or(now),
        category: or_default(&raw.category, NO_CATEGORY),
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// Strip markup tags, then truncate to the description limit.
pub fn clean_description(description: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(description, "");

    if stripped.chars().count() > DESCRIPTION_LIMIT {
        let mut truncated: String = stripped.chars().take(DESCRIPTION_LIMIT).collect();
        truncated.push_str("...");
        truncated
    } else {
        stripped.into_owned()
    }
}

fn parse_created(created: &str) -> Option<DateTime<Utc>> {
    let created = created.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(created) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(created, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(created, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_record_gets_every_default() {
        let job = normalize_at(&RawUpstreamJob::default(), "", fixed_now());

        assert_eq!(job.title, "No title available");
        assert_eq!(job.company, "Company not specified");
        assert_eq!(job.location, "Location not specified");
        assert_eq!(job.description, "No description available");
        assert_eq!(job.salary, "Not specified");
        assert_eq!(job.link, "#");
        assert_eq!(job.source, "adzuna");
        assert_eq!(job.posted_date, fixed_now());
        assert_eq!(job.category, "Not specified");
    }

    #[test]
    fn test_location_falls_back_to_query_location() {
        let job = normalize_at(&RawUpstreamJob::default(), "bangalore", fixed_now());
        assert_eq!(job.location, "bangalore");
    }

    #[test]
    fn test_full_record() {
        let raw = RawUpstreamJob {
            title: Some("Backend Developer".into()),
            company: Some("Acme".into()),
            location: Some("Hyderabad".into()),
            description: Some("<p>Build <b>services</b></p>".into()),
            salary_min: Some(600_000.0),
            salary_max: Some(900_000.0),
            redirect_url: Some("https://example.com/1".into()),
            created: Some("2024-05-02T08:15:00Z".into()),
            category: Some("IT Jobs".into()),
        };

        let job = normalize_at(&raw, "bangalore", fixed_now());
        assert_eq!(job.title, "Backend Developer");
        assert_eq!(job.location, "Hyderabad");
        assert_eq!(job.description, "Build services");
        assert_eq!(job.salary, "₹6.0L - ₹9.0L");
        assert_eq!(job.link, "https://example.com/1");
        assert_eq!(
            job.posted_date,
            Utc.with_ymd_and_hms(2024, 5, 2, 8, 15, 0).unwrap()
        );
        assert_eq!(job.category, "IT Jobs");
    }

    #[test]
    fn test_description_stripped_before_truncation() {
        // 400 visible characters with tags sprinkled in between.
        let body = format!(
            "{}<br/>{}<span class=\"x\">{}</span>",
            "a".repeat(200),
            "b".repeat(100),
            "c".repeat(100)
        );
        let cleaned = clean_description(&body);

        let expected = "a".repeat(200) + &"b".repeat(100) + "...";
        assert_eq!(cleaned, expected);
        assert_eq!(cleaned.chars().count(), 303);
    }

    #[test]
    fn test_short_description_has_no_ellipsis() {
        assert_eq!(clean_description("Hello &amp; <i>welcome</i>"), "Hello &amp; welcome");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let cleaned = clean_description(&"₹".repeat(301));
        assert_eq!(cleaned, "₹".repeat(300) + "...");
    }

    #[test]
    fn test_created_formats() {
        assert_eq!(
            parse_created("2024-01-15T10:30:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(
            parse_created("2024-01-15"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_created("last tuesday"), None);

        let raw = RawUpstreamJob {
            created: Some("not a date".into()),
            ..Default::default()
        };
        assert_eq!(normalize_at(&raw, "", fixed_now()).posted_date, fixed_now());
    }

    #[test]
    fn test_normalize_is_pure() {
        let raw = RawUpstreamJob {
            title: Some("SRE".into()),
            created: Some("2024-02-01T00:00:00Z".into()),
            salary_min: Some(45_000.0),
            ..Default::default()
        };
        assert_eq!(normalize(&raw, "chennai"), normalize(&raw, "chennai"));
    }
}
