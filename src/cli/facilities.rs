use clap::Parser;

use crate::{prelude::*, store::ObservationStore, tables::build_facilities_table};

#[derive(Parser)]
pub struct FacilitiesArgs {}

impl FacilitiesArgs {
    pub fn run(self, store: &impl ObservationStore) -> Result {
        let facilities = store.facilities()?;
        info!(n_facilities = facilities.len(), "listing…");
        println!("{}", build_facilities_table(&facilities));
        Ok(())
    }
}
