//! Fare pricing: a flat rate per unit of travel cost.

/// Default price of one unit of travel cost.
pub const DEFAULT_RATE: u64 = 10;

/// Currency symbol used when printing prices.
pub const CURRENCY: &str = "₹";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    pub rate_per_unit: u64,
}

impl Default for Fare {
    fn default() -> Self {
        Self {
            rate_per_unit: DEFAULT_RATE,
        }
    }
}

impl Fare {
    pub fn new(rate_per_unit: u64) -> Self {
        Self { rate_per_unit }
    }

    /// Price of a trip of the given cost. Saturates instead of overflowing.
    #[inline]
    pub fn price(&self, cost: u64) -> u64 {
        cost.saturating_mul(self.rate_per_unit)
    }
}
