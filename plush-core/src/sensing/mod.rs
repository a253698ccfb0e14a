//! Debounced sensors
//!
//! Each sensor turns a noisy raw condition into at most one "active" tick
//! per physical event. They share one state machine, [`Debouncer`],
//! parameterized by a [`DebounceConfig`](crate::config::DebounceConfig).

pub mod debounce;
pub mod motion;
pub mod thermal;
pub mod touch;

pub use debounce::{DebounceEvent, Debouncer, SensorPhase, SensorState};
pub use motion::{MotionSensor, Recalibration};
pub use thermal::ThermalTrigger;
pub use touch::TouchSensor;
