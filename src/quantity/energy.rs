quantity!(KilowattHours, "kWh");

impl KilowattHours {
    /// Valid readings are finite and non-negative.
    pub fn is_valid_reading(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}
