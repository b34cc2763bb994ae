use serde::Serialize;

use crate::error::AnalysisError;

/// Mean and population standard deviation of a grade list.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GradeStats {
    pub mean: f64,
    pub sd: f64,
}

pub struct Statistics;

impl Statistics {
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sum = 0.0;
        for &v in values {
            sum += v;
        }
        Some(sum / values.len() as f64)
    }

    /// Sum of squared deviations divided by N.
    pub fn population_variance(values: &[f64]) -> Option<f64> {
        let mean = Self::mean(values)?;
        let mut sum_sq = 0.0;
        for &v in values {
            let d = v - mean;
            sum_sq += d * d;
        }
        Some(sum_sq / values.len() as f64)
    }

    /// An empty list has no count to divide by and faults with
    /// [`AnalysisError::DivisionByZero`].
    pub fn grade_stats(values: &[f64]) -> Result<GradeStats, AnalysisError> {
        let mean = Self::mean(values).ok_or(AnalysisError::DivisionByZero)?;
        let variance = Self::population_variance(values).ok_or(AnalysisError::DivisionByZero)?;
        Ok(GradeStats {
            mean,
            sd: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{GradeStats, Statistics};
    use crate::error::AnalysisError;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
    }

    #[test]
    fn mean_keeps_fractional_part() {
        let m = Statistics::mean(&[70.0, 85.5, 91.0]).unwrap();
        assert!(close(m, 82.16666666666667, 1e-12));
        assert!(Statistics::mean(&[]).is_none());
    }

    #[test]
    fn typical_grades() {
        let s = Statistics::grade_stats(&[85.0, 90.0, 78.0, 92.0, 88.0]).unwrap();
        assert!(close(s.mean, 86.6, 1e-9));
        // Squared deviations sum to 119.2; 119.2 / 5 = 23.84.
        assert!(close(s.sd, 4.882622246293481, 1e-12));
        assert!(close(s.sd * s.sd, 23.84, 1e-12));
    }

    #[test]
    fn identical_grades_have_zero_spread() {
        let s = Statistics::grade_stats(&[80.0; 5]).unwrap();
        assert_eq!(s, GradeStats { mean: 80.0, sd: 0.0 });
    }

    #[test]
    fn divides_by_n_not_n_minus_one() {
        let s = Statistics::grade_stats(&[70.0, 90.0]).unwrap();
        assert!(close(s.mean, 80.0, 1e-12));
        assert!(close(s.sd, 10.0, 1e-12));
    }

    #[test]
    fn single_grade() {
        let s = Statistics::grade_stats(&[95.0]).unwrap();
        assert_eq!(s.mean, 95.0);
        assert_eq!(s.sd, 0.0);
    }

    #[test]
    fn zero_is_a_valid_grade() {
        let s = Statistics::grade_stats(&[0.0, 50.0, 100.0]).unwrap();
        assert!(close(s.mean, 50.0, 1e-12));
        assert!(close(s.sd, 40.824829046386, 1e-5));
    }

    #[test]
    fn larger_dataset() {
        let grades = [75.0, 80.0, 85.0, 90.0, 95.0, 100.0, 65.0, 70.0, 88.0, 92.0];
        let s = Statistics::grade_stats(&grades).unwrap();
        assert!(close(s.mean, 84.0, 1e-12));
        // Squared deviations sum to 1148; 1148 / 10 = 114.8.
        assert!(close(s.sd, 10.714476188783099, 1e-12));
        assert!(close(s.sd * s.sd, 114.8, 1e-12));
    }

    #[test]
    fn empty_list_divides_by_zero() {
        assert_eq!(
            Statistics::grade_stats(&[]),
            Err(AnalysisError::DivisionByZero)
        );
        assert!(Statistics::population_variance(&[]).is_none());
    }

    #[test]
    fn serializes_as_mean_and_sd() {
        let json = serde_json::to_string(&GradeStats { mean: 80.0, sd: 0.0 }).unwrap();
        assert_eq!(json, r#"{"mean":80.0,"sd":0.0}"#);
    }
}
