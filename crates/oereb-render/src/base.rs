//! Formatting helpers shared by all renderer flavours.

use chrono::NaiveDateTime;

/// ISO-8601 timestamp at second resolution, as the extract schema
/// requires for the creation date.
pub fn date_time(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}
