//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in plush-core, on top of `embedded-hal` 1.0:
//!
//! - Sensors (MPU-6050 accelerometer, touch button, NTC thermistor)
//! - Servo bank (50 Hz PWM)
//! - Sound board trigger lines
//!
//! Bus and pin errors are absorbed here; each driver documents what it
//! reports instead.

#![no_std]
#![deny(unsafe_code)]

pub mod audio;
pub mod sensor;
pub mod servo;

pub use audio::SoundBoard;
pub use sensor::{AdcReader, Button, Mpu6050, Thermistor};
pub use servo::ServoBank;
