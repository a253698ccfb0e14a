//! Compile-time tuning
//!
//! Every threshold, delay and limit the state machines use lives here.
//! There is no runtime configuration surface: the values are `const` and
//! baked into the firmware image.

pub mod tuning;

pub use tuning::*;
