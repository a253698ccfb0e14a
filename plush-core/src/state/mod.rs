//! Reaction state machine
//!
//! `machine` holds the phases and the pure transition function;
//! `controller` owns the counters and runs the entry actions.

pub mod controller;
pub mod machine;

pub use controller::{Stimulus, TopControlState, TopController};
pub use machine::{Observation, Phase};
