//! Integer-only numeric routines
//!
//! The target has no FPU, so everything here is fixed-point.

pub mod magnitude;

pub use magnitude::{isqrt_approx, magnitude, sum_of_squares};
