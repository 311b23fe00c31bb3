use crate::{
    core::facility::{Facility, FacilityId},
    error::ReportError,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Single day of the rota.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Step {
    /// Day of month, starting from 1.
    pub day: u32,

    pub facility: FacilityId,

    /// Consumption of the serviced facility on that day.
    pub consumption: KilowattHours,

    /// Whether the facility differs from the previous day's one.
    pub is_switch: bool,
}

impl Step {
    pub fn cost(&self, switching_penalty: Cost) -> Cost {
        let cost = Cost::from(self.consumption);
        if self.is_switch { cost + switching_penalty } else { cost }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub steps: Vec<Step>,
    pub total_cost: Cost,
}

impl Assignment {
    pub fn facilities(&self) -> impl Iterator<Item = FacilityId> {
        self.steps.iter().map(|step| step.facility)
    }

    #[must_use]
    pub fn n_switches(&self) -> usize {
        self.steps.iter().filter(|step| step.is_switch).count()
    }

    /// Translate the rota into `Day N: <name>` lines.
    ///
    /// # Errors
    ///
    /// [`ReportError::UnknownFacility`] when a step refers to a facility not in `facilities`.
    pub fn named(&self, facilities: &[Facility]) -> Result<Vec<String>, ReportError> {
        self.steps
            .iter()
            .map(|step| {
                let facility = facilities
                    .iter()
                    .find(|facility| facility.id == step.facility)
                    .ok_or(ReportError::UnknownFacility { facility: step.facility })?;
                Ok(format!("Day {}: {}", step.day, facility.name))
            })
            .collect()
    }
}
