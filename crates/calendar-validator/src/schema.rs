//! Top-level document schema: `version`, `savedAt` and `events`.
//!
//! Documents are checked as generic JSON trees so that a partial or
//! mistyped document still yields one diagnostic per problem instead of a
//! single deserialization failure.

use serde_json::Value;

use crate::report::Diagnostics;

/// Required top-level fields, in reporting order.
pub const REQUIRED_FIELDS: [&str; 3] = ["version", "savedAt", "events"];

/// The only `version` accepted without a warning.
pub const EXPECTED_VERSION: &str = "1.0";

/// Check the document's required fields and their primitive types.
///
/// Every missing or mistyped field is reported; returns `false` if any
/// error was recorded, in which case events must not be examined.
pub fn validate_schema(document: &Value, diagnostics: &mut Diagnostics) -> bool {
    let Some(root) = document.as_object() else {
        diagnostics.error("Document root must be a JSON object");
        return false;
    };

    let mut valid = true;
    for field in REQUIRED_FIELDS {
        if !root.contains_key(field) {
            diagnostics.error(format!("Missing required field: {field}"));
            valid = false;
        }
    }

    if let Some(version) = root.get("version") {
        if !version.is_string() {
            diagnostics.error("Field \"version\" must be a string");
            valid = false;
        }
    }
    if let Some(saved_at) = root.get("savedAt") {
        if !saved_at.is_string() {
            diagnostics.error("Field \"savedAt\" must be a string");
            valid = false;
        }
    }
    if let Some(events) = root.get("events") {
        if !events.is_array() {
            diagnostics.error("Field \"events\" must be an array");
            valid = false;
        }
    }

    valid
}
