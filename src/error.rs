use chrono::Month;

use crate::core::facility::FacilityId;

/// Report failures the caller may want to tell apart.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ReportError {
    /// The facility has no observations in the requested month.
    #[error("not enough data for facility #{facility} in {}", .month.name())]
    NotEnoughData { facility: FacilityId, month: Month },

    /// The facility has no reading for the day of the weekly window.
    #[error("missing consumption of facility #{facility} on day {day}")]
    MissingData { facility: FacilityId, day: u32 },

    /// The rota planner only works with exactly two facilities.
    #[error("expected exactly two facilities, got {n_facilities}")]
    InvalidConfiguration { n_facilities: usize },

    /// Both candidate facilities of the rota are the same one.
    #[error("facility #{facility} is listed twice")]
    DuplicateFacility { facility: FacilityId },

    /// The requested facility is not in the store.
    #[error("unknown facility #{facility}")]
    UnknownFacility { facility: FacilityId },
}
