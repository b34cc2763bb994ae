use foundation::{HalfLife, Ratio, Years};

use crate::error::AnalysisError;

pub struct Radiocarbon;

impl Radiocarbon {
    /// Estimated age of a sample, in years, from the fraction of carbon-14
    /// left relative to living tissue. Uses the 5730 year half-life.
    pub fn age_from_ratio(ratio: f64) -> Result<Years, AnalysisError> {
        Self::estimate_age(ratio, HalfLife::CAMBRIDGE)
    }

    /// Same as [`Radiocarbon::age_from_ratio`] with a caller-chosen half-life.
    pub fn estimate_age(ratio: f64, half_life: HalfLife) -> Result<Years, AnalysisError> {
        let ratio = Ratio::new(ratio)?;
        Ok(Self::age_with_half_life(ratio, half_life))
    }

    pub fn age_with_half_life(ratio: Ratio, half_life: HalfLife) -> Years {
        let decay_constant = -std::f64::consts::LN_2;
        let elapsed = ratio.get().ln() / decay_constant * half_life.years();
        // ln(1) / -ln(2) is -0.0
        Years(elapsed + 0.0)
    }

    /// Forward decay: fraction left after `age`. Ages before the reference
    /// point (negative) give ratios above 1.
    pub fn ratio_for_age(age: Years, half_life: HalfLife) -> f64 {
        (-age.0 / half_life.years()).exp2()
    }
}
