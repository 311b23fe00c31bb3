use std::collections::BTreeMap;

use chrono::{Datelike, Month};

use crate::{
    core::{
        facility::{Facility, FacilityId},
        observation::DAYS_IN_WEEK,
    },
    error::ReportError,
    prelude::*,
    quantity::energy::KilowattHours,
    statistics::daily::DailyReadings,
    store::ObservationStore,
};

/// Daily consumption over the weekly window: index `i` holds day `i + 1`.
pub type DailyConsumption = [Option<KilowattHours>; DAYS_IN_WEEK];

/// Consumption of each facility over the first seven days of a month.
///
/// Only facilities with at least one reading in the window are present.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyConsumption(BTreeMap<FacilityId, DailyConsumption>);

impl WeeklyConsumption {
    pub fn get(&self, facility: FacilityId) -> Option<&DailyConsumption> {
        self.0.get(&facility)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of days in the window having a reading.
    #[must_use]
    pub fn n_days(&self, facility: FacilityId) -> usize {
        self.get(facility).map_or(0, |daily| daily.iter().flatten().count())
    }

    /// Get the consumption for every day of the window.
    ///
    /// # Errors
    ///
    /// [`ReportError::MissingData`] for the first day without a reading.
    pub fn try_full_week(
        &self,
        facility: FacilityId,
    ) -> Result<[KilowattHours; DAYS_IN_WEEK], ReportError> {
        let daily = self.get(facility).ok_or(ReportError::MissingData { facility, day: 1 })?;
        let mut week = [KilowattHours::ZERO; DAYS_IN_WEEK];
        for ((day, slot), energy) in (1..).zip(&mut week).zip(daily) {
            *slot = energy.ok_or(ReportError::MissingData { facility, day })?;
        }
        Ok(week)
    }

    /// Place the daily readings into the window slots by their day of month.
    fn insert(&mut self, facility: FacilityId, readings: &DailyReadings) {
        let mut daily: DailyConsumption = [None; DAYS_IN_WEEK];
        let mut has_readings = false;
        for (date, energy) in readings.iter() {
            if let Some(slot) = daily.get_mut(date.day0() as usize) {
                *slot = Some(energy);
                has_readings = true;
            }
        }
        if has_readings {
            self.0.insert(facility, daily);
        }
    }
}

impl FromIterator<(FacilityId, DailyConsumption)> for WeeklyConsumption {
    fn from_iter<T: IntoIterator<Item = (FacilityId, DailyConsumption)>>(iterator: T) -> Self {
        Self(iterator.into_iter().collect())
    }
}

/// Collect the consumption of the first seven days of the month for each facility.
///
/// Readings are placed by their day of month, so the store may return them in any order.
/// Days are collected as in [`DailyReadings`].
#[instrument(skip_all, fields(month = month.name()))]
pub fn first_week(
    facilities: &[Facility],
    store: &(impl ObservationStore + ?Sized),
    month: Month,
) -> Result<WeeklyConsumption> {
    let mut weekly = WeeklyConsumption::default();
    for facility in facilities {
        let observations = store.observations(facility.id)?;
        weekly.insert(facility.id, &DailyReadings::from_observations(&observations, month));
        let n_days = weekly.n_days(facility.id);
        if n_days != 0 && n_days < DAYS_IN_WEEK {
            warn!(%facility.id, n_days, "incomplete week");
        }
    }
    if weekly.is_empty() {
        warn!("no readings in the weekly window");
    } else {
        info!(n_facilities = weekly.len(), "collected");
    }
    Ok(weekly)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        core::observation::Observation,
        statistics::average::average_consumption,
        store::memory::InMemoryStore,
    };

    fn observation(month: u32, day: u32, energy: f64) -> Observation {
        dated(2024, month, day, energy)
    }

    fn dated(year: i32, month: u32, day: u32, energy: f64) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            KilowattHours(energy),
        )
    }

    fn facility(id: u32) -> Facility {
        Facility::builder().id(FacilityId(id)).name(format!("Plant {id}")).build()
    }

    #[test]
    fn test_first_week_sorts_by_day() -> Result {
        let store = InMemoryStore::default().with_facility(
            facility(1),
            [7, 3, 1, 5, 2, 6, 4, 8, 9]
                .into_iter()
                .map(|day| observation(6, day, f64::from(day) * 10.0)),
        );
        let weekly = first_week(&store.facilities()?, &store, Month::June)?;
        assert_eq!(
            weekly.try_full_week(FacilityId(1))?,
            [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0].map(KilowattHours),
        );
        Ok(())
    }

    #[test]
    fn test_first_week_filters_month() -> Result {
        let store = InMemoryStore::default()
            .with_facility(facility(1), [observation(5, 1, 1.0), observation(6, 8, 1.0)])
            .with_facility(facility(2), [observation(6, 2, 4.0)]);
        let weekly = first_week(&store.facilities()?, &store, Month::June)?;
        assert_eq!(weekly.len(), 1);
        assert!(weekly.get(FacilityId(1)).is_none());
        assert_eq!(
            weekly.get(FacilityId(2)),
            Some(&[None, Some(KilowattHours(4.0)), None, None, None, None, None]),
        );
        assert_eq!(weekly.n_days(FacilityId(2)), 1);
        Ok(())
    }

    #[test]
    fn test_same_day_readings_are_summed() -> Result {
        let store = InMemoryStore::default()
            .with_facility(facility(1), [observation(6, 3, 1.5), observation(6, 3, 2.0)]);
        let weekly = first_week(&store.facilities()?, &store, Month::June)?;
        let daily = weekly.get(FacilityId(1)).context("the facility should be present")?;
        assert_eq!(daily[2], Some(KilowattHours(3.5)));
        assert_eq!(weekly.n_days(FacilityId(1)), 1);
        Ok(())
    }

    #[test]
    fn test_years_are_not_mixed() -> Result {
        let store = InMemoryStore::default().with_facility(
            facility(1),
            (1..=7).flat_map(|day| [dated(2023, 6, day, 10.0), dated(2024, 6, day, 10.0)]),
        );
        let facilities = store.facilities()?;
        let weekly = first_week(&facilities, &store, Month::June)?;
        assert_eq!(weekly.try_full_week(FacilityId(1))?, [KilowattHours(10.0); DAYS_IN_WEEK]);

        let averages = average_consumption(&facilities, &store, Month::June)?;
        assert_eq!(averages[0].average, Ok(KilowattHours(10.0)));
        Ok(())
    }

    #[test]
    fn test_older_year_does_not_fill_gaps() -> Result {
        let store = InMemoryStore::default().with_facility(
            facility(1),
            (1..=7).map(|day| dated(2023, 6, day, 10.0)).chain([dated(2024, 6, 1, 5.0)]),
        );
        let weekly = first_week(&store.facilities()?, &store, Month::June)?;
        assert_eq!(weekly.n_days(FacilityId(1)), 1);
        assert_eq!(
            weekly.try_full_week(FacilityId(1)),
            Err(ReportError::MissingData { facility: FacilityId(1), day: 2 }),
        );
        Ok(())
    }

    #[test]
    fn test_try_full_week_missing_day() {
        let weekly: WeeklyConsumption = [(
            FacilityId(1),
            [Some(1.0), Some(1.0), None, Some(1.0), Some(1.0), Some(1.0), Some(1.0)]
                .map(|energy| energy.map(KilowattHours)),
        )]
        .into_iter()
        .collect();
        assert_eq!(
            weekly.try_full_week(FacilityId(1)),
            Err(ReportError::MissingData { facility: FacilityId(1), day: 3 }),
        );
        assert_eq!(
            weekly.try_full_week(FacilityId(2)),
            Err(ReportError::MissingData { facility: FacilityId(2), day: 1 }),
        );
    }
}
