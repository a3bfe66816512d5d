//! Outer-shell boundary condition.

use crate::error::{SolverError, SolverResult};
use std::fmt;
use std::sync::Arc;

/// Nondimensional temperature imposed at the droplet surface (grid index 0).
///
/// The physical freezing case is `Constant(1.0)`.
#[derive(Clone)]
pub enum BoundaryCondition {
    /// Fixed value for the whole run.
    Constant(f64),
    /// Value as a function of nondimensional time.
    TimeFunction(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
    /// Zero gradient: the surface copies its first interior neighbour.
    Reflective,
}

impl BoundaryCondition {
    pub fn time_function<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::TimeFunction(Arc::new(f))
    }

    /// Value to impose before the interior update at time `t`.
    ///
    /// `None` means the surface is derived from the updated interior instead.
    pub fn imposed_value(&self, t: f64) -> SolverResult<Option<f64>> {
        match self {
            Self::Constant(v) => Ok(Some(*v)),
            Self::TimeFunction(f) => {
                let v = f(t);
                if v.is_finite() {
                    Ok(Some(v))
                } else {
                    Err(SolverError::Numeric {
                        what: format!("outer boundary function returned {v} at t = {t}"),
                    })
                }
            }
            Self::Reflective => Ok(None),
        }
    }
}

impl Default for BoundaryCondition {
    fn default() -> Self {
        Self::Constant(1.0)
    }
}

impl fmt::Debug for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::TimeFunction(_) => f.write_str("TimeFunction(<fn>)"),
            Self::Reflective => f.write_str("Reflective"),
        }
    }
}
