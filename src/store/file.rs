use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;

use crate::{
    core::{facility::Facility, observation::Observation},
    prelude::*,
    store::memory::InMemoryStore,
};

#[derive(Deserialize)]
struct Document {
    #[serde(default, rename = "facility")]
    facilities: Vec<FacilityEntry>,
}

#[derive(Deserialize)]
struct FacilityEntry {
    #[serde(flatten)]
    facility: Facility,

    #[serde(default, rename = "observation")]
    observations: Vec<Observation>,
}

impl InMemoryStore {
    /// Load the store from a TOML document.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let this = Self::from_toml(&contents)
            .with_context(|| format!("failed to load `{}`", path.display()))?;
        info!(n_observations = this.n_observations(), "loaded");
        Ok(this)
    }

    /// Parse the store from a TOML document.
    ///
    /// Each `[[facility]]` table carries `id`, `name`, and `address`, followed by
    /// `[[facility.observation]]` tables with `date` and `kwh`.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let document: Document = toml::from_str(contents).context("malformed observations")?;
        let mut seen_ids = HashSet::with_capacity(document.facilities.len());
        let mut this = Self::default();
        for entry in document.facilities {
            let id = entry.facility.id;
            ensure!(seen_ids.insert(id), "facility #{id} is defined more than once");
            for observation in &entry.observations {
                ensure!(
                    observation.energy.is_valid_reading(),
                    "facility #{id} has an invalid reading of {} on {}",
                    observation.energy,
                    observation.date,
                );
            }
            debug!(%id, n_observations = entry.observations.len(), "facility");
            this = this.with_facility(entry.facility, entry.observations);
        }
        Ok(this)
    }
}
