pub mod file;
pub mod memory;

use crate::{
    core::{
        facility::{Facility, FacilityId},
        observation::Observation,
    },
    prelude::*,
};

/// Read-only source of facilities and their consumption readings.
pub trait ObservationStore {
    fn facilities(&self) -> Result<Vec<Facility>>;

    /// Observations are not guaranteed to be ordered by date.
    fn observations(&self, facility_id: FacilityId) -> Result<Vec<Observation>>;
}
