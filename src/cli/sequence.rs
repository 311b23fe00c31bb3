use chrono::Month;
use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::month::parse_month,
    core::{
        facility::{Facility, FacilityId},
        sequencer::Sequencer,
        strategy::Strategy,
    },
    error::ReportError,
    prelude::*,
    quantity::cost::Cost,
    statistics::weekly::first_week,
    store::ObservationStore,
    tables::build_assignment_table,
};

#[derive(Parser)]
pub struct SequenceArgs {
    /// Month number (1–12) or name.
    #[clap(long, value_parser = parse_month)]
    month: Month,

    /// Facility to choose from, exactly two are expected.
    ///
    /// Defaults to the first two facilities in the store.
    #[clap(long = "facility", value_delimiter = ',')]
    facilities: Vec<FacilityId>,

    /// Cost of servicing another facility than on the previous day.
    #[clap(
        long,
        env = "SWITCHING_PENALTY",
        default_value = "5",
        value_parser = parse_switching_penalty
    )]
    switching_penalty: Cost,

    #[clap(long, env = "SEQUENCE_STRATEGY", value_enum, default_value_t = Strategy::Greedy)]
    strategy: Strategy,
}

impl SequenceArgs {
    pub fn run(self, store: &impl ObservationStore) -> Result {
        let all_facilities = store.facilities()?;
        let facilities = self.resolve_facilities(&all_facilities)?;
        info!(facilities = ?facilities.iter().map(|facility| &facility.name).collect_vec());

        let weekly_consumption = first_week(&facilities, store, self.month)?;
        let facility_ids = facilities.iter().map(|facility| facility.id).collect_vec();
        let assignment = Sequencer::builder()
            .facilities(&facility_ids)
            .weekly_consumption(&weekly_consumption)
            .switching_penalty(self.switching_penalty)
            .strategy(self.strategy)
            .build()
            .solve()
            .with_context(|| format!("failed to plan {}", self.month.name()))?;

        println!(
            "{}",
            build_assignment_table(&assignment, &facilities, self.switching_penalty)?
        );
        Ok(())
    }

    fn resolve_facilities(&self, all_facilities: &[Facility]) -> Result<Vec<Facility>> {
        if self.facilities.is_empty() {
            return Ok(all_facilities.iter().take(2).cloned().collect());
        }
        self.facilities
            .iter()
            .map(|id| {
                all_facilities
                    .iter()
                    .find(|facility| facility.id == *id)
                    .cloned()
                    .ok_or(ReportError::UnknownFacility { facility: *id })
            })
            .collect::<Result<_, _>>()
            .map_err(Error::from)
    }
}

fn parse_switching_penalty(value: &str) -> Result<Cost> {
    let penalty: Cost =
        value.parse().with_context(|| format!("invalid switching penalty: `{value}`"))?;
    ensure!(
        penalty.is_valid_penalty(),
        "switching penalty must be finite and non-negative, got {penalty}"
    );
    Ok(penalty)
}
