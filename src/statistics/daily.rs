use std::collections::BTreeMap;

use chrono::{Datelike, Month, NaiveDate};

use crate::{core::observation::Observation, quantity::energy::KilowattHours};

/// Consumption per calendar day within the most recent occurrence of a month.
///
/// Readings of the same date are summed up. When the month occurs in several years,
/// only the latest year with readings is kept, so days of different years never mix.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DailyReadings(BTreeMap<NaiveDate, KilowattHours>);

impl DailyReadings {
    pub fn from_observations(observations: &[Observation], month: Month) -> Self {
        let in_month = || observations.iter().filter(move |observation| observation.is_in(month));
        let Some(year) = in_month().map(|observation| observation.date.year()).max() else {
            return Self::default();
        };
        let mut days = BTreeMap::new();
        for observation in in_month().filter(|observation| observation.date.year() == year) {
            *days.entry(observation.date).or_insert(KilowattHours::ZERO) += observation.energy;
        }
        Self(days)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, KilowattHours)> + '_ {
        self.0.iter().map(|(date, energy)| (*date, *energy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(year: i32, month: u32, day: u32, energy: f64) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            KilowattHours(energy),
        )
    }

    #[test]
    fn test_latest_year_only() {
        let readings = DailyReadings::from_observations(
            &[
                observation(2024, 6, 1, 10.0),
                observation(2023, 6, 1, 10.0),
                observation(2023, 6, 2, 10.0),
                observation(2025, 7, 1, 99.0),
            ],
            Month::June,
        );
        assert_eq!(readings.iter().collect::<Vec<_>>(), [(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            KilowattHours(10.0)
        )]);
    }

    #[test]
    fn test_same_date_is_summed() {
        let readings = DailyReadings::from_observations(
            &[observation(2024, 6, 3, 1.5), observation(2024, 6, 3, 2.0)],
            Month::June,
        );
        assert_eq!(readings.len(), 1);
        assert_eq!(readings.iter().next().map(|(_, energy)| energy), Some(KilowattHours(3.5)));
    }

    #[test]
    fn test_empty() {
        let readings =
            DailyReadings::from_observations(&[observation(2024, 5, 1, 1.0)], Month::June);
        assert!(readings.is_empty());
    }
}
