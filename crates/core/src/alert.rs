//! Alert and toolbox-talk stamping helpers.

use chrono::SecondsFormat;

use crate::types::Timestamp;

/// Prefix that keeps toolbox-talk ids in their own namespace.
pub const TOOLBOX_TALK_ID_PREFIX: &str = "talk-";

/// Calendar date (`YYYY-MM-DD`, UTC) an alert raised at `at` is filed under.
pub fn alert_date(at: Timestamp) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// RFC 3339 creation stamp for toolbox talks, millisecond precision with `Z`.
pub fn iso_timestamp(at: Timestamp) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
