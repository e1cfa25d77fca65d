//! Annotation list projection.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use shared::domain::{Annotation, AnnotationId, Rating, ResourceId};

pub const LIST_HEADER: &str = "Comments";

const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationEntry {
    pub id: AnnotationId,
    pub body: String,
    pub author: String,
    pub rating: Rating,
    pub date: String,
}

/// Where the annotation form is mounted, and for which resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMount {
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationListView {
    pub header: &'static str,
    pub entries: Vec<AnnotationEntry>,
    pub form: FormMount,
}

/// `None` renders nothing at all; an empty slice still gets the header and the form.
/// Entries keep the order they were supplied in.
pub fn render_annotations(
    annotations: Option<&[Annotation]>,
    resource_id: ResourceId,
) -> Option<AnnotationListView> {
    let annotations = annotations?;
    let entries = annotations
        .iter()
        .map(|annotation| AnnotationEntry {
            id: annotation.id,
            body: annotation.body.clone(),
            author: annotation.author.clone(),
            rating: annotation.rating,
            date: format_date(&annotation.date),
        })
        .collect();

    Some(AnnotationListView {
        header: LIST_HEADER,
        entries,
        form: FormMount { resource_id },
    })
}

/// Formats an ISO-8601 timestamp as e.g. `Mar 02, 2024` (UTC).
/// Input that does not parse is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(at) => at.format(DISPLAY_DATE_FORMAT).to_string(),
        None => {
            tracing::warn!(date = raw, "unparseable annotation timestamp");
            raw.to_string()
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }

    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(at.and_utc());
        }
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

#[cfg(test)]
#[path = "tests/annotations_tests.rs"]
mod tests;
