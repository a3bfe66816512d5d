use crate::FfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, FfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(FfError::NonPositive { what, value: v })
    }
}

/// Number of whole steps of size `step` that fit in `span`.
///
/// A relative slack absorbs quotients like `1.0 / 0.005` that land a hair below
/// the integer they represent.
pub fn step_count(span: Real, step: Real) -> usize {
    let q = span / step;
    (q + q.abs() * 1e-9).floor() as usize
}

/// True when `span` is an integer multiple of `step` within `rel` of a step.
pub fn is_multiple_of(span: Real, step: Real, rel: Real) -> bool {
    let q = span / step;
    (q - q.round()).abs() <= rel * q.abs().max(1.0)
}
