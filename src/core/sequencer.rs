use bon::Builder;
use itertools::Itertools;

use crate::{
    core::{
        assignment::{Assignment, Step},
        facility::FacilityId,
        observation::DAYS_IN_WEEK,
        strategy::Strategy,
    },
    error::ReportError,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
    statistics::weekly::WeeklyConsumption,
};

/// Plans which of the two facilities to service on each day of the weekly window.
#[derive(Builder)]
pub struct Sequencer<'a> {
    /// Candidate facilities. The first one wins the ties.
    facilities: &'a [FacilityId],

    weekly_consumption: &'a WeeklyConsumption,

    #[builder(default = Cost::DEFAULT_SWITCHING_PENALTY)]
    switching_penalty: Cost,

    #[builder(default)]
    strategy: Strategy,
}

impl Sequencer<'_> {
    /// Build the rota for the weekly window.
    ///
    /// # Errors
    ///
    /// - [`ReportError::InvalidConfiguration`] unless there are exactly two facilities.
    /// - [`ReportError::DuplicateFacility`] when both facilities are the same.
    /// - [`ReportError::MissingData`] when a facility lacks a reading on any day of the window.
    #[instrument(skip_all, fields(strategy = %self.strategy, penalty = %self.switching_penalty))]
    pub fn solve(&self) -> Result<Assignment, ReportError> {
        let &[first, second] = self.facilities else {
            return Err(ReportError::InvalidConfiguration { n_facilities: self.facilities.len() });
        };
        if first == second {
            return Err(ReportError::DuplicateFacility { facility: first });
        }
        let candidates = Candidates {
            facilities: [first, second],
            weeks: [
                self.weekly_consumption.try_full_week(first)?,
                self.weekly_consumption.try_full_week(second)?,
            ],
        };
        let assignment = match self.strategy {
            Strategy::Greedy => self.solve_greedily(&candidates),
            Strategy::Optimal => self.solve_optimally(&candidates),
        };
        debug!(facilities = ?assignment.facilities().collect_vec(), "rota");
        info!(%assignment.total_cost, n_switches = assignment.n_switches(), "solved");
        Ok(assignment)
    }

    /// Service the facility with the strictly lower consumption each day.
    fn solve_greedily(&self, candidates: &Candidates) -> Assignment {
        let mut accumulator = Accumulator::new(self.switching_penalty);
        for day_index in 0..DAYS_IN_WEEK {
            let consumption = candidates.on_day(day_index);
            // Ties go to the first facility:
            let choice = usize::from(consumption[1] < consumption[0]);
            accumulator.push(candidates.facilities[choice], consumption[choice]);
        }
        accumulator.into()
    }

    /// Find the minimum-cost rota by [dynamic programming][1] over `(day, last facility)`.
    ///
    /// Works backwards from the last day, computing the minimal cost of the remaining days
    /// for either facility serviced on the day before.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Dynamic_programming
    fn solve_optimally(&self, candidates: &Candidates) -> Assignment {
        // `remaining_costs[day_index][last]` covers the days from `day_index` on:
        let mut remaining_costs = [[Cost::ZERO; 2]; DAYS_IN_WEEK + 1];
        let mut choices = [[0_usize; 2]; DAYS_IN_WEEK];

        // Going backwards:
        for day_index in (0..DAYS_IN_WEEK).rev() {
            let consumption = candidates.on_day(day_index);
            let next_costs = remaining_costs[day_index + 1];
            for last in 0..2 {
                let cost_of = |choice: usize| {
                    let penalty = if choice == last { Cost::ZERO } else { self.switching_penalty };
                    Cost::from(consumption[choice]) + penalty + next_costs[choice]
                };
                let choice = usize::from(cost_of(1) < cost_of(0));
                choices[day_index][last] = choice;
                remaining_costs[day_index][last] = cost_of(choice);
            }
        }

        // The first day has no predecessor, hence no penalty:
        let first_cost_of =
            |choice: usize| Cost::from(candidates.on_day(0)[choice]) + remaining_costs[1][choice];
        let mut choice = usize::from(first_cost_of(1) < first_cost_of(0));

        let mut accumulator = Accumulator::new(self.switching_penalty);
        for day_index in 0..DAYS_IN_WEEK {
            if day_index != 0 {
                choice = choices[day_index][choice];
            }
            accumulator.push(candidates.facilities[choice], candidates.on_day(day_index)[choice]);
        }
        accumulator.into()
    }
}

/// The two facilities with their full weekly consumption.
struct Candidates {
    facilities: [FacilityId; 2],
    weeks: [[KilowattHours; DAYS_IN_WEEK]; 2],
}

impl Candidates {
    const fn on_day(&self, day_index: usize) -> [KilowattHours; 2] {
        [self.weeks[0][day_index], self.weeks[1][day_index]]
    }
}

/// Partial rota threaded through the days.
struct Accumulator {
    switching_penalty: Cost,
    steps: Vec<Step>,
    last_facility: Option<FacilityId>,
    cost: Cost,
}

impl Accumulator {
    fn new(switching_penalty: Cost) -> Self {
        Self {
            switching_penalty,
            steps: Vec::with_capacity(DAYS_IN_WEEK),
            last_facility: None,
            cost: Cost::ZERO,
        }
    }

    fn push(&mut self, facility: FacilityId, consumption: KilowattHours) {
        let step = Step {
            day: self.next_day(),
            facility,
            consumption,
            is_switch: self.last_facility.is_some_and(|last_facility| last_facility != facility),
        };
        debug!(step.day, %step.facility, %step.consumption, step.is_switch, "step");
        self.cost += step.cost(self.switching_penalty);
        self.last_facility = Some(facility);
        self.steps.push(step);
    }

    fn next_day(&self) -> u32 {
        self.steps.last().map_or(1, |step| step.day + 1)
    }
}

impl From<Accumulator> for Assignment {
    fn from(accumulator: Accumulator) -> Self {
        Self { steps: accumulator.steps, total_cost: accumulator.cost }
    }
}
