use std::fmt;

/// Fraction of carbon-14 left in a sample relative to living tissue.
///
/// Always in `(0, 1]`; construct with [`Ratio::new`].
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ratio(f64);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RatioError {
    NotPositive,
    ExceedsOne,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioError::NotPositive => {
                write!(f, "Carbon-14 ratio must be positive (greater than 0)")
            }
            RatioError::ExceedsOne => write!(
                f,
                "Carbon-14 ratio cannot exceed 1.0 (sample cannot have more C-14 than living tissue)"
            ),
        }
    }
}

impl std::error::Error for RatioError {}

impl Ratio {
    pub const ONE: Ratio = Ratio(1.0);

    pub fn new(value: f64) -> Result<Self, RatioError> {
        if value.is_nan() || value <= 0.0 {
            return Err(RatioError::NotPositive);
        }
        if value > 1.0 {
            return Err(RatioError::ExceedsOne);
        }
        Ok(Ratio(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Ratio {
    type Error = RatioError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Ratio::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Ratio, RatioError};

    #[test]
    fn accepts_open_closed_unit_interval() {
        assert_eq!(Ratio::new(1.0).unwrap(), Ratio::ONE);
        assert!((Ratio::new(0.35).unwrap().get() - 0.35).abs() < 1e-12);
        assert!(Ratio::new(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Ratio::new(0.0), Err(RatioError::NotPositive));
        assert_eq!(Ratio::new(-0.5), Err(RatioError::NotPositive));
        assert_eq!(Ratio::new(f64::NAN), Err(RatioError::NotPositive));
        assert_eq!(Ratio::new(1.0000001), Err(RatioError::ExceedsOne));
        assert_eq!(Ratio::try_from(2.0), Err(RatioError::ExceedsOne));
    }

    #[test]
    fn messages_name_the_violation() {
        assert!(
            RatioError::NotPositive
                .to_string()
                .contains("ratio must be positive")
        );
        assert!(
            RatioError::ExceedsOne
                .to_string()
                .contains("ratio cannot exceed 1.0")
        );
    }
}
