//! Job Entities - Upstream job records and their normalized form

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use utoipa::ToSchema;

/// Provider tag stamped on every normalized job.
pub const JOB_SOURCE: &str = "adzuna";

/// A job record as returned by the upstream API. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawUpstreamJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub redirect_url: Option<String>,
    pub created: Option<String>,
    pub category: Option<String>,
}

impl RawUpstreamJob {
    /// Pick the consumed fields out of an upstream JSON object.
    ///
    /// Wrongly typed fields are treated as absent; empty strings too.
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: text_at(value, &["title"]),
            company: text_at(value, &["company", "display_name"]),
            location: text_at(value, &["location", "display_name"]),
            description: text_at(value, &["description"]),
            salary_min: number_at(value, "salary_min"),
            salary_max: number_at(value, "salary_max"),
            redirect_url: text_at(value, &["redirect_url"]),
            created: text_at(value, &["created"]),
            category: text_at(value, &["category", "label"]),
        }
    }
}

impl From<&Value> for RawUpstreamJob {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

fn text_at(root: &Value, path: &[&str]) -> Option<String> {
    path.iter()
        .try_fold(root, |node, key| node.get(*key))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn number_at(root: &Value, key: &str) -> Option<f64> {
    match root.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A job in the fixed output schema. Every field is always populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub link: String,
    pub source: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub posted_date: DateTime<Utc>,
    pub category: String,
}

fn serialize_iso_millis<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_from_value_reads_nested_fields() {
        let raw = RawUpstreamJob::from_value(&json!({
            "title": "Rust Engineer",
            "company": { "display_name": "Acme" },
            "location": { "display_name": "Pune, Maharashtra" },
            "salary_min": 1200000,
            "salary_max": "1800000",
            "category": { "label": "IT Jobs" },
            "redirect_url": "https://example.com/job/1"
        }));

        assert_eq!(raw.title.as_deref(), Some("Rust Engineer"));
        assert_eq!(raw.company.as_deref(), Some("Acme"));
        assert_eq!(raw.location.as_deref(), Some("Pune, Maharashtra"));
        assert_eq!(raw.salary_min, Some(1_200_000.0));
        assert_eq!(raw.salary_max, Some(1_800_000.0));
        assert_eq!(raw.category.as_deref(), Some("IT Jobs"));
        assert!(raw.description.is_none());
        assert!(raw.created.is_none());
    }

    #[test]
    fn test_from_value_ignores_wrong_types_and_empty_strings() {
        let raw = RawUpstreamJob::from_value(&json!({
            "title": "",
            "company": "Acme",
            "salary_min": true,
            "category": { "label": 7 }
        }));
        assert_eq!(raw, RawUpstreamJob::default());
    }

    #[test]
    fn test_posted_date_serializes_with_millis() {
        let job = NormalizedJob {
            title: "t".into(),
            company: "c".into(),
            location: "l".into(),
            description: "d".into(),
            salary: "Not specified".into(),
            link: "#".into(),
            source: JOB_SOURCE.into(),
            posted_date: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            category: "Not specified".into(),
        };

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["postedDate"], "2024-01-15T10:30:00.000Z");
        assert_eq!(json["source"], "adzuna");
    }
}
