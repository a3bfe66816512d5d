//! ff-core: stable foundation for frostfront.
//!
//! Contains:
//! - units (uom SI types + constructors for droplet material properties)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)
//! - timing (opt-in wall-clock timers)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

pub use error::{FfError, FfResult};
pub use numeric::*;
pub use units::*;
