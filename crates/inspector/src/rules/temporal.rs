//! Date rules

use chrono::{DateTime, NaiveDate};

/// Calendar date layouts accepted by [`Date`].
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

crate::rule! {
    /// Passes for calendar dates (`2024-02-29`, `2024/02/29`, `02/29/2024`)
    /// and RFC 3339 timestamps. Impossible dates such as `2023-02-29` fail.
    pub Date for text;
    test(input) { is_date(input.trim()) }
    fn date();
}

fn is_date(input: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(input, format).is_ok())
        || DateTime::parse_from_rfc3339(input).is_ok()
}
