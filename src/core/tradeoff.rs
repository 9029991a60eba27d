//! core/tradeoff.rs — piecewise-maximum error bound.
//!
//! For a timestep dt and a tolerance pair (eps_a, eps_b) the bound is
//! `max(alpha*dt, beta*eps_a, gamma*eps_b/dt)`: the discretisation term
//! grows with dt, the roundoff-accumulation term shrinks with it, and
//! `beta*eps_a` is the floor set by the representation itself.

use serde::{Deserialize, Serialize};

use crate::core::logspace::LogSweep;
use crate::error::AccDiscError;

/// Scalar multipliers on the three competing terms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermWeights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Default for TermWeights {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
        }
    }
}

impl TermWeights {
    pub fn validate(&self) -> Result<(), AccDiscError> {
        let named = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(AccDiscError::BadWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Tolerance pair defining one curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpsPair {
    pub eps_a: f64,
    pub eps_b: f64,
}

impl EpsPair {
    /// Legend label, e.g. "eps_a=6e-8, eps_b=1e-16".
    pub fn label(&self) -> String {
        format!("eps_a={:e}, eps_b={:e}", self.eps_a, self.eps_b)
    }
}

/// Evaluated bound, one value per sweep sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TradeoffCurve {
    pub pair: EpsPair,
    pub values: Vec<f64>,
}

/// Bound at a single timestep. dt must be strictly positive; dt = 0
/// is an error, never a silent infinity.
pub fn bound_at(weights: &TermWeights, pair: &EpsPair, dt: f64) -> Result<f64, AccDiscError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(AccDiscError::NonPositiveSample(dt));
    }
    let disc = weights.alpha * dt;
    let floor = weights.beta * pair.eps_a;
    let accum = weights.gamma * pair.eps_b / dt;
    Ok(disc.max(floor).max(accum))
}

/// Evaluate the bound at every sweep sample for one pair.
pub fn evaluate_curve(
    weights: &TermWeights,
    pair: &EpsPair,
    sweep: &LogSweep,
) -> Result<TradeoffCurve, AccDiscError> {
    let values = sweep
        .samples
        .iter()
        .map(|&dt| bound_at(weights, pair, dt))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(TradeoffCurve {
        pair: *pair,
        values,
    })
}

/// Evaluate one curve per pair. The pair list must be non-empty and the
/// weights finite and non-negative.
pub fn evaluate_curves(
    weights: &TermWeights,
    pairs: &[EpsPair],
    sweep: &LogSweep,
) -> Result<Vec<TradeoffCurve>, AccDiscError> {
    if pairs.is_empty() {
        return Err(AccDiscError::NoEpsPairs);
    }
    weights.validate()?;
    pairs
        .iter()
        .map(|pair| evaluate_curve(weights, pair, sweep))
        .collect()
}
