use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::Deserialize;

#[derive(
    Copy,
    Clone,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct FacilityId(pub u32);

/// Monitored site consuming energy.
#[must_use]
#[derive(Builder, Clone, Debug, Deserialize)]
pub struct Facility {
    pub id: FacilityId,

    #[builder(into)]
    pub name: String,

    #[builder(into, default)]
    #[serde(default)]
    pub address: String,
}

/// Facilities are the same when their identifiers are.
impl PartialEq for Facility {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Facility {}

impl Display for Facility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | Address: {}", self.id, self.name, self.address)
    }
}
