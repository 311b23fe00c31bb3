use chrono::{Datelike, Month, NaiveDate};
use serde::Deserialize;

use crate::quantity::energy::KilowattHours;

/// Length of the weekly window at the start of a month.
pub const DAYS_IN_WEEK: usize = 7;

/// Dated energy reading of a single facility.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Observation {
    pub date: NaiveDate,

    #[serde(rename = "kwh")]
    pub energy: KilowattHours,
}

#[cfg(test)]
impl Observation {
    pub const fn new(date: NaiveDate, energy: KilowattHours) -> Self {
        Self { date, energy }
    }
}

impl Observation {
    /// Whether the observation falls into the month of any year.
    #[must_use]
    pub fn is_in(&self, month: Month) -> bool {
        self.date.month() == month.number_from_month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(year: i32, month: u32, day: u32) -> Observation {
        Observation::new(NaiveDate::from_ymd_opt(year, month, day).unwrap(), KilowattHours(1.0))
    }

    #[test]
    fn test_is_in() {
        assert!(observation(2024, 6, 30).is_in(Month::June));
        assert!(observation(2023, 6, 1).is_in(Month::June));
        assert!(!observation(2024, 7, 1).is_in(Month::June));
    }
}
