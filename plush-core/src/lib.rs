//! Board-agnostic control core for the animatronic plush
//!
//! Everything that decides how the toy reacts lives here, behind narrow
//! hardware traits:
//!
//! - Hardware abstraction traits (motion sensor, touch pad, thermistor,
//!   servos, sound board, free-running counter)
//! - Tuning constants
//! - Integer magnitude estimation
//! - Debounced sensors with drift recalibration
//! - Bounded-step joint control
//! - The reaction state machine
//! - The frame that ticks all of the above in order
//!
//! Nothing here allocates or blocks; every component advances by exactly
//! one frame per `tick`.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod frame;
pub mod math;
pub mod motion;
pub mod sensing;
pub mod state;
pub mod traits;

pub use frame::{Board, Frame, FrameReport, Peripherals};
