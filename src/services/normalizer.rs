//! Tolerant coercion of loaded JSON into canonical record shapes.
//!
//! Normalization never fails: wrong-typed values degrade to safe defaults
//! and every correction is reported through `tracing` warnings on the
//! `app::normalize` target so corrupt files are visible without blocking
//! the user.

use std::collections::BTreeMap;

use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::warn;

use crate::models::options::{
    is_optional_section, ACTIVITY_STATUS_OPTIONS, BILLABLE_OPTIONS, DEFAULT_ACTIVITY_STATUS,
    DEFAULT_PRIORITY, OPTIONAL_SECTIONS, PRIORITY_OPTIONS, VALID_REPORT_STATUSES,
};
use crate::models::report::{Activity, ReportRecord, UpcomingActivity, STATUS_DRAFT};
use crate::models::text_item::TextItem;

/// Coerces one loaded report document. `fallback_id` (usually the file
/// stem) fills in when the document lacks a usable id.
pub fn normalize_report(fallback_id: &str, value: JsonValue) -> ReportRecord {
    let map = match value {
        JsonValue::Object(map) => map,
        other => {
            warn!(target: "app::normalize", id = %fallback_id, found = %json_kind(&other), "report document is not an object, starting from an empty record");
            JsonMap::new()
        }
    };

    let id = {
        let raw = normalize_string("id", map.get("id"));
        if raw.trim().is_empty() {
            fallback_id.to_string()
        } else {
            raw
        }
    };

    ReportRecord {
        id,
        name: normalize_string("name", map.get("name")),
        reporting_week: normalize_string("reportingWeek", map.get("reportingWeek")),
        status: normalize_report_status(map.get("status")),
        timestamp: normalize_string("timestamp", map.get("timestamp")),
        last_updated: normalize_optional_string(map.get("lastUpdated")),
        current_activities: normalize_activity_list(
            "currentActivities",
            map.get("currentActivities"),
        ),
        upcoming_activities: normalize_upcoming_list(
            "upcomingActivities",
            map.get("upcomingActivities"),
        ),
        accomplishments: normalize_text_list("accomplishments", map.get("accomplishments")),
        followups: normalize_text_list("followups", map.get("followups")),
        nextsteps: normalize_text_list("nextsteps", map.get("nextsteps")),
        optional_sections: normalize_optional_sections(&map),
    }
}

/// Scalar coercion: strings pass through, null/absent becomes empty, and
/// anything else is stringified with a warning.
pub fn normalize_string(field: &str, value: Option<&JsonValue>) -> String {
    match value {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(text)) => text.clone(),
        Some(other) => {
            warn!(target: "app::normalize", field, found = %json_kind(other), "expected a string, stringifying");
            stringify(other)
        }
    }
}

fn normalize_optional_string(value: Option<&JsonValue>) -> Option<String> {
    match value {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(text)) => Some(text.clone()),
        Some(other) => {
            warn!(target: "app::normalize", found = %json_kind(other), "expected a string, stringifying");
            Some(stringify(other))
        }
    }
}

fn normalize_report_status(value: Option<&JsonValue>) -> String {
    let raw = normalize_string("status", value);
    if VALID_REPORT_STATUSES.contains(&raw.as_str()) {
        raw
    } else {
        if !raw.is_empty() {
            warn!(target: "app::normalize", field = "status", %raw, "unknown report status, resetting to draft");
        }
        STATUS_DRAFT.to_string()
    }
}

/// Text lists keep their editable-row invariant on load: a missing, wrong-
/// typed, or empty value becomes a single blank entry so the editor always
/// has a row to render.
pub fn normalize_text_list(field: &str, value: Option<&JsonValue>) -> Vec<TextItem> {
    let mut items = Vec::new();
    match value {
        None | Some(JsonValue::Null) => {}
        Some(JsonValue::Array(elements)) => {
            for element in elements {
                match element {
                    JsonValue::String(raw) => items.push(TextItem::decode(raw)),
                    JsonValue::Null => {}
                    other => {
                        warn!(target: "app::normalize", field, found = %json_kind(other), "non-string list entry, stringifying");
                        items.push(TextItem::Plain(stringify(other)));
                    }
                }
            }
        }
        Some(other) => {
            warn!(target: "app::normalize", field, found = %json_kind(other), "expected a list, substituting one blank entry");
        }
    }
    if items.is_empty() {
        items.push(TextItem::default());
    }
    items
}

/// Activity lists keep only object elements; everything else is dropped
/// with a warning. An empty result stays empty here — the form layer adds
/// its own blank row.
pub fn normalize_activity_list(field: &str, value: Option<&JsonValue>) -> Vec<Activity> {
    object_elements(field, value)
        .into_iter()
        .map(|map| normalize_activity(field, &map))
        .collect()
}

pub fn normalize_upcoming_list(field: &str, value: Option<&JsonValue>) -> Vec<UpcomingActivity> {
    object_elements(field, value)
        .into_iter()
        .map(|map| normalize_upcoming(field, &map))
        .collect()
}

fn object_elements(field: &str, value: Option<&JsonValue>) -> Vec<JsonMap<String, JsonValue>> {
    match value {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(JsonValue::Array(elements)) => elements
            .iter()
            .filter_map(|element| match element {
                JsonValue::Object(map) => Some(map.clone()),
                other => {
                    warn!(target: "app::normalize", field, found = %json_kind(other), "dropping non-object activity entry");
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(target: "app::normalize", field, found = %json_kind(other), "expected a list of activities, substituting empty");
            Vec::new()
        }
    }
}

fn normalize_activity(field: &str, map: &JsonMap<String, JsonValue>) -> Activity {
    let has_deadline = normalize_bool(field, "hasDeadline", map.get("hasDeadline"));
    let deadline = if has_deadline {
        normalize_string("deadline", map.get("deadline"))
    } else {
        // A cleared deadline flag always clears the date.
        String::new()
    };

    Activity {
        project: normalize_string("project", map.get("project")),
        milestone: normalize_string("milestone", map.get("milestone")),
        priority: normalize_choice(
            field,
            "priority",
            map.get("priority"),
            PRIORITY_OPTIONS,
            DEFAULT_PRIORITY,
        ),
        status: normalize_choice(
            field,
            "status",
            map.get("status"),
            ACTIVITY_STATUS_OPTIONS,
            DEFAULT_ACTIVITY_STATUS,
        ),
        customer: normalize_string("customer", map.get("customer")),
        billable: normalize_choice(field, "billable", map.get("billable"), BILLABLE_OPTIONS, ""),
        has_deadline,
        deadline,
        progress: normalize_progress(field, map.get("progress")),
        description: normalize_string("description", map.get("description")),
    }
}

fn normalize_upcoming(field: &str, map: &JsonMap<String, JsonValue>) -> UpcomingActivity {
    UpcomingActivity {
        project: normalize_string("project", map.get("project")),
        milestone: normalize_string("milestone", map.get("milestone")),
        priority: normalize_choice(
            field,
            "priority",
            map.get("priority"),
            PRIORITY_OPTIONS,
            DEFAULT_PRIORITY,
        ),
        expected_start: normalize_string("expectedStart", map.get("expectedStart")),
        description: normalize_string("description", map.get("description")),
    }
}

fn normalize_bool(field: &str, key: &str, value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(flag)) => *flag,
        Some(other) => {
            warn!(target: "app::normalize", field, key, found = %json_kind(other), "expected a bool, defaulting to false");
            false
        }
    }
}

fn normalize_progress(field: &str, value: Option<&JsonValue>) -> i64 {
    let raw = match value {
        None | Some(JsonValue::Null) => 0,
        Some(JsonValue::Number(number)) => number
            .as_i64()
            .unwrap_or_else(|| number.as_f64().map(|f| f.round() as i64).unwrap_or(0)),
        Some(JsonValue::String(text)) => text.trim().parse::<i64>().unwrap_or_else(|_| {
            warn!(target: "app::normalize", field, value = %text, "non-numeric progress, defaulting to 0");
            0
        }),
        Some(other) => {
            warn!(target: "app::normalize", field, found = %json_kind(other), "expected a number, defaulting to 0");
            0
        }
    };
    raw.clamp(0, 100)
}

fn normalize_choice(
    field: &str,
    key: &str,
    value: Option<&JsonValue>,
    options: &[&str],
    default: &str,
) -> String {
    let raw = normalize_string(key, value);
    if options.contains(&raw.as_str()) {
        raw
    } else {
        if !raw.is_empty() {
            warn!(target: "app::normalize", field, key, %raw, "unknown option, resetting to default");
        }
        default.to_string()
    }
}

/// Optional sections live either in the `optionalSections` object (current
/// format) or as top-level registry keys (legacy format); both are read,
/// blanks dropped.
fn normalize_optional_sections(map: &JsonMap<String, JsonValue>) -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();

    for (key, _) in OPTIONAL_SECTIONS {
        if let Some(value) = map.get(*key) {
            let text = normalize_string(key, Some(value));
            if !text.trim().is_empty() {
                sections.insert((*key).to_string(), text);
            }
        }
    }

    match map.get("optionalSections") {
        None | Some(JsonValue::Null) => {}
        Some(JsonValue::Object(inner)) => {
            for (key, value) in inner {
                if !is_optional_section(key) {
                    warn!(target: "app::normalize", key = %key, "unknown optional section, dropping");
                    continue;
                }
                let text = normalize_string(key, Some(value));
                if !text.trim().is_empty() {
                    sections.insert(key.clone(), text);
                }
            }
        }
        Some(other) => {
            warn!(target: "app::normalize", found = %json_kind(other), "optionalSections is not an object, ignoring");
        }
    }

    sections
}

fn stringify(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Number(number) => number.to_string(),
        JsonValue::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
