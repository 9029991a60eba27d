use thiserror::Error;

/// Input validation failures. All are fatal; the run terminates on the
/// first one. I/O and drawing errors propagate as their own types.
#[derive(Debug, Error)]
pub enum AccDiscError {
    #[error("sweep needs at least 2 samples to cover both endpoints, got {0}")]
    BadSampleCount(usize),

    #[error("sweep exponents must satisfy start_exp < end_exp, got {start_exp} .. {end_exp}")]
    BadSweepRange { start_exp: f64, end_exp: f64 },

    #[error("dt must be strictly positive and finite, got {0}")]
    NonPositiveSample(f64),

    #[error("term weight {name} must be finite and non-negative, got {value}")]
    BadWeight { name: &'static str, value: f64 },

    #[error("at least one (eps_a, eps_b) pair is required")]
    NoEpsPairs,
}
