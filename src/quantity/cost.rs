use crate::quantity::energy::KilowattHours;

quantity!(Cost, "u");

impl Cost {
    /// Fixed cost of servicing another facility than on the previous day.
    pub const DEFAULT_SWITCHING_PENALTY: Self = Self(5.0);

    /// Valid penalties are finite and non-negative.
    pub fn is_valid_penalty(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

/// Consumed energy counts towards the cost one-to-one.
impl From<KilowattHours> for Cost {
    fn from(energy: KilowattHours) -> Self {
        Self(energy.0)
    }
}
