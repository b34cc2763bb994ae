use serde::Serialize;

/// Elapsed time, in years.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Years(pub f64);

/// Radioactive half-life, in years.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HalfLife(pub f64);

impl HalfLife {
    /// Modern carbon-14 half-life.
    pub const CAMBRIDGE: HalfLife = HalfLife(5730.0);
    /// Half-life used for conventional radiocarbon ages.
    pub const LIBBY: HalfLife = HalfLife(5568.0);

    pub fn years(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for HalfLife {
    fn default() -> Self {
        HalfLife::CAMBRIDGE
    }
}
