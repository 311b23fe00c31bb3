use chrono::Month;
use clap::Parser;

use crate::{
    cli::month::parse_month,
    prelude::*,
    statistics::average::average_consumption,
    store::ObservationStore,
    tables::build_averages_table,
};

#[derive(Parser)]
pub struct AverageArgs {
    /// Month number (1–12) or name.
    #[clap(long, value_parser = parse_month)]
    month: Month,
}

impl AverageArgs {
    pub fn run(self, store: &impl ObservationStore) -> Result {
        let facilities = store.facilities()?;
        let averages = average_consumption(&facilities, store, self.month)?;
        println!("{}", build_averages_table(&averages));
        Ok(())
    }
}
