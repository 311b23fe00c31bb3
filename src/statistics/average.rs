use chrono::Month;
use derive_more::AddAssign;

use crate::{
    core::facility::Facility,
    error::ReportError,
    prelude::*,
    quantity::energy::KilowattHours,
    statistics::daily::DailyReadings,
    store::ObservationStore,
};

/// Average daily consumption of a single facility over a month.
#[must_use]
#[derive(Clone, Debug)]
pub struct FacilityAverage {
    pub facility: Facility,

    /// [`ReportError::NotEnoughData`] when the facility has no readings in the month.
    pub average: Result<KilowattHours, ReportError>,
}

/// Calculate the average daily consumption of each facility in the month.
///
/// The result follows the order of `facilities`. A facility without readings in the month
/// gets an error entry instead of failing the whole report. Days are counted as in
/// [`DailyReadings`].
#[instrument(skip_all, fields(month = month.name()))]
pub fn average_consumption(
    facilities: &[Facility],
    store: &(impl ObservationStore + ?Sized),
    month: Month,
) -> Result<Vec<FacilityAverage>> {
    info!(n_facilities = facilities.len(), "averaging…");
    facilities
        .iter()
        .map(|facility| {
            let observations = store.observations(facility.id)?;
            let readings = DailyReadings::from_observations(&observations, month);
            let average = Accumulator::from_readings(&readings)
                .average()
                .ok_or(ReportError::NotEnoughData { facility: facility.id, month });
            match &average {
                Ok(average) => debug!(%facility.id, %average, "averaged"),
                Err(error) => warn!(%error, "skipped"),
            }
            Ok(FacilityAverage { facility: facility.clone(), average })
        })
        .collect()
}

#[derive(Copy, Clone, Default, AddAssign)]
struct Accumulator {
    total: KilowattHours,
    n_days: u32,
}

impl Accumulator {
    fn from_readings(readings: &DailyReadings) -> Self {
        let mut this = Self::default();
        for (_, energy) in readings.iter() {
            this += Self { total: energy, n_days: 1 };
        }
        this
    }

    fn average(self) -> Option<KilowattHours> {
        if self.n_days == 0 { None } else { Some(self.total / f64::from(self.n_days)) }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        core::{facility::FacilityId, observation::Observation},
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

    fn store() -> InMemoryStore {
        InMemoryStore::default()
            .with_facility(
                Facility::builder().id(FacilityId(1)).name("Plant A").build(),
                [
                    observation(6, 2, 20.0),
                    observation(5, 31, 1000.0),
                    observation(6, 1, 10.0),
                    observation(6, 30, 15.0),
                ],
            )
            .with_facility(
                Facility::builder().id(FacilityId(2)).name("Plant B").build(),
                [observation(5, 1, 7.0), observation(7, 1, 9.0)],
            )
            .with_facility(
                Facility::builder().id(FacilityId(3)).name("Plant C").build(),
                [observation(6, 10, 3.5)],
            )
    }

    #[test]
    fn test_average_consumption() -> Result {
        let store = store();
        let facilities = store.facilities()?;
        let averages = average_consumption(&facilities, &store, Month::June)?;

        assert_eq!(averages.len(), 3);
        assert_eq!(averages[0].facility.name, "Plant A");
        assert_abs_diff_eq!(averages[0].average?.0, 15.0);
        assert_eq!(
            averages[1].average,
            Err(ReportError::NotEnoughData { facility: FacilityId(2), month: Month::June }),
        );
        assert_eq!(averages[2].facility.name, "Plant C");
        assert_abs_diff_eq!(averages[2].average?.0, 3.5);
        Ok(())
    }

    #[test]
    fn test_average_is_sum_over_count() -> Result {
        let store = store();
        let facilities = store.facilities()?;
        let averages = average_consumption(&facilities, &store, Month::May)?;
        assert_abs_diff_eq!(averages[0].average?.0, 1000.0);
        assert_abs_diff_eq!(averages[1].average?.0, 7.0);
        assert!(averages[2].average.is_err());
        Ok(())
    }

    #[test]
    fn test_daily_readings() -> Result {
        let store = InMemoryStore::default().with_facility(
            Facility::builder().id(FacilityId(1)).name("Plant A").build(),
            [
                dated(2023, 6, 1, 100.0),
                dated(2024, 6, 1, 4.0),
                dated(2024, 6, 1, 6.0),
                dated(2024, 6, 2, 20.0),
            ],
        );
        let averages = average_consumption(&store.facilities()?, &store, Month::June)?;
        assert_abs_diff_eq!(averages[0].average?.0, 15.0);
        Ok(())
    }

    #[test]
    fn test_no_facilities() -> Result {
        assert!(average_consumption(&[], &InMemoryStore::default(), Month::June)?.is_empty());
        Ok(())
    }
}
