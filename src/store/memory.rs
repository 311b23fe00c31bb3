use std::collections::HashMap;

use crate::{
    core::{
        facility::{Facility, FacilityId},
        observation::Observation,
    },
    prelude::*,
    store::ObservationStore,
};

#[must_use]
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    facilities: Vec<Facility>,
    observations: HashMap<FacilityId, Vec<Observation>>,
}

impl InMemoryStore {
    /// Register the facility along with its observations.
    ///
    /// Registering the same identifier again replaces the facility and appends the observations.
    pub fn with_facility(
        mut self,
        facility: Facility,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Self {
        self.observations.entry(facility.id).or_default().extend(observations);
        if let Some(existing) = self.facilities.iter_mut().find(|existing| **existing == facility) {
            *existing = facility;
        } else {
            self.facilities.push(facility);
        }
        self
    }

    pub fn n_observations(&self) -> usize {
        self.observations.values().map(Vec::len).sum()
    }
}

impl ObservationStore for InMemoryStore {
    fn facilities(&self) -> Result<Vec<Facility>> {
        Ok(self.facilities.clone())
    }

    fn observations(&self, facility_id: FacilityId) -> Result<Vec<Observation>> {
        Ok(self.observations.get(&facility_id).cloned().unwrap_or_default())
    }
}
