use chrono::Month;

use crate::prelude::*;

/// Parse a month either by its number (`6`) or by its name (`June`, `jun`).
pub fn parse_month(value: &str) -> Result<Month> {
    match value.parse::<u8>() {
        Ok(number) => Month::try_from(number)
            .ok()
            .with_context(|| format!("month number must be within 1..=12, got {number}")),
        Err(_) => value.parse().ok().with_context(|| format!("unknown month: `{value}`")),
    }
}
