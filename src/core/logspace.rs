//! core/logspace.rs — log10-spaced sample sweep.
//!
//! Uniform spacing in log10(dt) between two decade exponents (inclusive).
//! Example: start_exp=-11, end_exp=0, count=200 → 1e-11 .. 1.0.

use crate::error::AccDiscError;

/// Uniform log10(dt) sample sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct LogSweep {
    pub start_exp: f64,
    pub end_exp: f64,
    pub samples: Vec<f64>,
    pub step_exp: f64,
}

impl LogSweep {
    /// Create a sweep of `count` samples between 10^start_exp and
    /// 10^end_exp (inclusive).
    pub fn new(start_exp: f64, end_exp: f64, count: usize) -> Result<Self, AccDiscError> {
        if count < 2 {
            return Err(AccDiscError::BadSampleCount(count));
        }
        if !start_exp.is_finite() || !end_exp.is_finite() || end_exp <= start_exp {
            return Err(AccDiscError::BadSweepRange { start_exp, end_exp });
        }

        let step_exp = (end_exp - start_exp) / (count - 1) as f64;
        let samples: Vec<f64> = (0..count)
            .map(|i| 10f64.powf(start_exp + i as f64 * step_exp))
            .collect();

        Ok(Self {
            start_exp,
            end_exp,
            samples,
            step_exp,
        })
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Return Δlog10 per sample.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step_exp
    }

    #[inline]
    pub fn assert_curve_len<T>(&self, curve: &[T]) {
        debug_assert_eq!(curve.len(), self.n_samples());
    }

    /// First sample (== 10^start_exp).
    #[inline]
    pub fn first(&self) -> f64 {
        self.samples[0]
    }

    /// Last sample (== 10^end_exp up to rounding in the exponent grid).
    #[inline]
    pub fn last(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        (a / b - 1.0).abs() < tol
    }

    #[test]
    fn test_logsweep_basic() {
        let s = LogSweep::new(-11.0, 0.0, 200).unwrap();
        assert_eq!(s.n_samples(), 200);
        assert!(rel_close(s.first(), 1e-11, 1e-12));
        assert!(rel_close(s.last(), 1.0, 1e-12));
    }

    #[test]
    fn test_logsweep_geometric_spacing() {
        let s = LogSweep::new(-3.0, 2.0, 50).unwrap();
        let ratios: Vec<f64> = s.samples.windows(2).map(|w| w[1] / w[0]).collect();
        let target = ratios[0];
        assert!(ratios.iter().all(|&r| (r / target - 1.0).abs() < 1e-12));
        assert!(s.samples.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_logsweep_strictly_increasing() {
        let s = LogSweep::new(-11.0, 0.0, 200).unwrap();
        assert!(s.samples.windows(2).all(|w| w[1] > w[0]));
        assert!(s.samples.iter().all(|&x| x > 0.0));
    }

    #[test]
    fn test_logsweep_deterministic() {
        let a = LogSweep::new(-11.0, 0.0, 200).unwrap();
        let b = LogSweep::new(-11.0, 0.0, 200).unwrap();
        assert_eq!(a.samples, b.samples);
    }

    #[test]
    fn test_logsweep_rejects_bad_count() {
        assert!(matches!(
            LogSweep::new(-11.0, 0.0, 0),
            Err(AccDiscError::BadSampleCount(0))
        ));
        assert!(matches!(
            LogSweep::new(-11.0, 0.0, 1),
            Err(AccDiscError::BadSampleCount(1))
        ));
    }

    #[test]
    fn test_logsweep_rejects_bad_range() {
        assert!(matches!(
            LogSweep::new(0.0, -11.0, 200),
            Err(AccDiscError::BadSweepRange { .. })
        ));
        assert!(matches!(
            LogSweep::new(2.0, 2.0, 10),
            Err(AccDiscError::BadSweepRange { .. })
        ));
        assert!(matches!(
            LogSweep::new(f64::NAN, 0.0, 10),
            Err(AccDiscError::BadSweepRange { .. })
        ));
    }
}
